//! Headless walkthrough of a button's feel: fade in on activation, squash on
//! press, punch back on release, then reset. Drives a plain in-memory node
//! through a fixed 60 fps loop and prints the pose each step.

use std::time::Duration;

use glam::Vec3;
use uifeel::prelude::*;
use uifeel::{ColorRgba, curves};

struct ButtonNode {
    scale: Vec3,
    position: Vec3,
    rotation: Vec3,
    alpha: f32,
    color: ColorRgba,
}

impl ButtonNode {
    fn new() -> Self {
        Self {
            scale: Vec3::ONE,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            // Starts invisible; the activation effect fades it in.
            alpha: 0.,
            color: ColorRgba::WHITE,
        }
    }
}

impl EffectTarget for ButtonNode {
    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Vec3 {
        self.rotation
    }

    fn set_rotation(&mut self, euler: Vec3) {
        self.rotation = euler;
    }

    fn alpha(&self) -> Option<f32> {
        Some(self.alpha)
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn color(&self) -> Option<ColorRgba> {
        Some(self.color)
    }

    fn set_color(&mut self, color: ColorRgba) {
        self.color = color;
    }
}

fn run_frames(scheduler: &mut EffectScheduler, node: &mut ButtonNode, frames: u32) {
    const FRAME: f32 = 1. / 60.;

    for frame in 0..frames {
        scheduler.tick(FRAME, node);

        println!(
            "frame {frame:>3}  scale ({:.3}, {:.3})  alpha {:.3}",
            node.scale.x, node.scale.y, node.alpha,
        );
    }
}

fn main() {
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Debug)
        .init();

    let mut node = ButtonNode::new();
    let mut scheduler = EffectScheduler::new([
        TriggerBinding::new(
            TriggerKind::OnActivate,
            EffectDefinition::fade(1.)
                .curve(curves::ease_out_quad as fn(f32) -> f32)
                .duration(Duration::from_millis(250)),
        ),
        TriggerBinding::new(
            TriggerKind::OnPointerDown,
            EffectDefinition::scale(Vec3::new(0.92, 0.92, 1.))
                .relative()
                .duration(Duration::from_millis(100)),
        ),
        TriggerBinding::new(
            TriggerKind::OnPointerUp,
            EffectDefinition::punch_scale(Vec3::splat(0.1), 8, 1.)
                .duration(Duration::from_millis(300)),
        ),
    ]);

    log::info!("Button appears");
    scheduler.activate(&mut node);
    run_frames(&mut scheduler, &mut node, 16);

    log::info!("Pointer down");
    scheduler.play(TriggerKind::OnPointerDown, &mut node);
    run_frames(&mut scheduler, &mut node, 7);

    log::info!("Pointer up");
    scheduler.play(TriggerKind::OnPointerUp, &mut node);
    run_frames(&mut scheduler, &mut node, 19);

    // Out-of-range and unbound triggers degrade to logged no-ops.
    scheduler.play_at(10, &mut node);
    scheduler.play(TriggerKind::OnPointerExit, &mut node);

    log::info!("Reset to original");
    scheduler.reset_to_original(&mut node);

    println!(
        "final  scale ({:.3}, {:.3})  alpha {:.3}",
        node.scale.x, node.scale.y, node.alpha,
    );
}
