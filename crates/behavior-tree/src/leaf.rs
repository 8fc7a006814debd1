//! Leaf nodes wrapping plain functions.

use crate::{Behavior, Status};

/// Succeeds when the predicate holds. Never mutates the context.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool,
{
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

/// Runs a step against the context and reports its status.
///
/// An action returning `Failure` still keeps whatever it changed, which lets
/// a selector fall through to the next rule after a side effect.
pub struct Action<F> {
    step: F,
}

impl<F> Action<F> {
    pub fn new(step: F) -> Self {
        Self { step }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: Fn(&mut C) -> Status,
{
    fn tick(&self, ctx: &mut C) -> Status {
        (self.step)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Arena {
        boss_hp: u32,
        log: Vec<&'static str>,
    }

    #[test]
    fn condition_reads_without_mutation() {
        let low_health = Condition::new(|arena: &Arena| arena.boss_hp < 30);

        let mut arena = Arena {
            boss_hp: 10,
            log: Vec::new(),
        };
        assert_eq!(low_health.tick(&mut arena), Status::Success);

        arena.boss_hp = 80;
        assert_eq!(low_health.tick(&mut arena), Status::Failure);
        assert!(arena.log.is_empty());
    }

    #[test]
    fn failing_action_keeps_side_effects() {
        let roar = Action::new(|arena: &mut Arena| {
            arena.log.push("roar");
            Status::Failure
        });

        let mut arena = Arena {
            boss_hp: 50,
            log: Vec::new(),
        };
        assert_eq!(roar.tick(&mut arena), Status::Failure);
        assert_eq!(arena.log, vec!["roar"]);
    }
}
