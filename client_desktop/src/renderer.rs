//! Draws the three screens with macroquad

use game_core::{FsmState, ItemKind, Params, Session};
use macroquad::prelude::*;

use crate::assets::Assets;

const MENU_FALLBACK: Color = Color::new(0.55, 0.75, 0.45, 1.0);
const SHADOW_OFFSET: f32 = 5.0;
const TITLE_SIZE: u16 = 100;
const LINE_SIZE: u16 = 40;

pub fn draw(session: &Session, assets: &Assets) {
    match session.state() {
        FsmState::Menu => draw_menu(assets),
        FsmState::Playing => draw_playing(session, assets),
        FsmState::GameOver => draw_game_over(session.score.apples, assets),
        FsmState::Exited => {}
    }
}

fn draw_menu(assets: &Assets) {
    draw_backdrop(assets.menu.as_ref(), MENU_FALLBACK);
    draw_shadowed(assets, "Snake Game", 250.0, 140.0, DARKGREEN);
    draw_line_text(assets, "Press ENTER to Play", 280.0, 250.0, BLACK);
    draw_line_text(assets, "Press Q to Quit", 290.0, 300.0, BLACK);
}

fn draw_game_over(score: u32, assets: &Assets) {
    draw_backdrop(assets.menu.as_ref(), MENU_FALLBACK);
    draw_shadowed(assets, "Game Over", 280.0, 140.0, RED);
    draw_line_text(assets, &format!("Score: {}", score), 290.0, 260.0, GOLD);
    draw_line_text(assets, "Press ENTER to Play Again", 280.0, 320.0, BLACK);
    draw_line_text(assets, "Press Q to Quit", 290.0, 380.0, WHITE);
}

fn draw_playing(session: &Session, assets: &Assets) {
    clear_background(BLACK);
    if let Some(background) = &assets.background {
        draw_texture(background, 0.0, 0.0, WHITE);
    }

    let radius = Params::SEGMENT_SIZE / 2.0;
    for seg in session.snake_segments() {
        draw_circle(seg.x + radius, seg.y + radius, radius, GREEN);
    }

    if let Some(pos) = session.item_pos(ItemKind::Apple) {
        draw_item(assets.apple.as_ref(), pos.x, pos.y, Params::APPLE_SIZE, RED);
    }
    if let Some(pos) = session.item_pos(ItemKind::Obstacle) {
        draw_item(
            assets.obstacle.as_ref(),
            pos.x,
            pos.y,
            Params::OBSTACLE_SIZE,
            GRAY,
        );
    }
}

fn draw_backdrop(texture: Option<&Texture2D>, fallback: Color) {
    match texture {
        Some(texture) => {
            clear_background(BLACK);
            draw_texture(texture, 0.0, 0.0, WHITE);
        }
        None => clear_background(fallback),
    }
}

fn draw_item(texture: Option<&Texture2D>, x: f32, y: f32, size: f32, fallback: Color) {
    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, size, size, fallback),
    }
}

/// Title text with a black drop shadow up and to the left
fn draw_shadowed(assets: &Assets, text: &str, x: f32, y: f32, color: Color) {
    draw_at(assets, text, x - SHADOW_OFFSET, y - SHADOW_OFFSET, TITLE_SIZE, BLACK);
    draw_at(assets, text, x, y, TITLE_SIZE, color);
}

fn draw_line_text(assets: &Assets, text: &str, x: f32, y: f32, color: Color) {
    draw_at(assets, text, x, y, LINE_SIZE, color);
}

// Positions are top-left; macroquad places text on its baseline
fn draw_at(assets: &Assets, text: &str, x: f32, y: f32, size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y + size as f32,
        TextParams {
            font: assets.font.as_ref(),
            font_size: size,
            color,
            ..Default::default()
        },
    );
}
