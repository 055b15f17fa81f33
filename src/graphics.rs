//! Per-frame draw calls for the track, cars, radars, and HUD.

use evodrive::simulation::car::Car;
use evodrive::simulation::geometry;
use evodrive::simulation::params::Params;
use macroquad::prelude::*;

/// Blits the track image at the origin.
pub fn draw_track(texture: &Texture2D) {
    draw_texture(texture, 0.0, 0.0, WHITE);
}

/// Draws every alive car: rotated body, heading marker, and radar rays with
/// endpoint markers.
pub fn draw_cars(cars: &[Car], params: &Params) {
    for car in cars {
        if !car.is_alive() {
            continue;
        }

        draw_rectangle_ex(
            car.center[0],
            car.center[1],
            params.car_size_x,
            params.car_size_y,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: -car.angle.to_radians(),
                color: Color::from_rgba(200, 40, 40, 255),
            },
        );

        // heading marker on the nose
        let nose = &car.center + &(geometry::direction(car.angle) * (params.car_size_x / 2.0));
        draw_circle(nose[0], nose[1], 4.0, BLACK);

        for radar in &car.radars {
            draw_line(
                car.center[0],
                car.center[1],
                radar.hit[0],
                radar.hit[1],
                1.0,
                GREEN,
            );
            draw_circle(radar.hit[0], radar.hit[1], 5.0, GREEN);
        }
    }
}

/// Draws the generation and survivor counters on a white info panel in the
/// top-left corner.
pub fn draw_hud(generation: u32, still_alive: usize) {
    draw_rectangle(10.0, 10.0, 300.0, 100.0, WHITE);
    draw_text(
        &format!("Generation: {}", generation),
        20.0,
        50.0,
        30.0,
        BLACK,
    );
    draw_text(
        &format!("Still Alive: {}", still_alive),
        20.0,
        85.0,
        20.0,
        BLACK,
    );
}
