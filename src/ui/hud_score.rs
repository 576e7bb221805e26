//! UI domain: score display HUD element.

use bevy::prelude::*;

use crate::score::{Score, ScoreSink};

const HUD_PADDING: f32 = 20.0;

/// Marker for the score display UI container
#[derive(Component)]
pub struct ScoreDisplayUI;

/// Marker for the score amount text
#[derive(Component)]
pub struct ScoreAmountText;

pub(crate) fn spawn_score_display_ui(mut commands: Commands) {
    commands
        .spawn((
            ScoreDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Coin icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));

            parent.spawn((
                ScoreAmountText,
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
        });
}

pub(crate) fn update_score_display(
    score: Res<Score>,
    mut query: Query<&mut Text, With<ScoreAmountText>>,
) {
    if score.is_changed() {
        for mut text in &mut query {
            **text = format!("{}", score.total());
        }
    }
}
