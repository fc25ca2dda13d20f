pub mod easing;
pub mod effect;
mod foundation;
pub mod punch;
pub mod scheduler;
pub mod target;

pub use easing::*;
pub use effect::*;
pub use foundation::*;
pub use punch::punch;
pub use scheduler::*;
pub use target::*;

pub mod prelude {
    pub use crate::easing::{EasingCurve, curves};
    pub use crate::effect::{EffectDefinition, EffectKind, LoopKind, TriggerBinding, TriggerKind};
    pub use crate::scheduler::EffectScheduler;
    pub use crate::target::{EffectTarget, TargetSnapshot};
}
