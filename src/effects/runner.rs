//! Trampoline loop over effectful steps.

use crate::core::StepOutcome;
use stillwater::effect::Effect;

/// Drive an effectful `step` from `initial` until it produces `Done`.
///
/// Each step's effect is run to completion against `env` before the next
/// step is built. The first effect that fails stops the loop, and its error
/// is returned unchanged.
pub async fn run_effect<A, B, E, Env, Eff, F>(
    mut step: F,
    initial: A,
    env: &Env,
) -> Result<B, E>
where
    F: FnMut(A) -> Eff,
    Eff: Effect<Output = StepOutcome<B, A>, Error = E, Env = Env>,
    Env: Clone + Send + Sync,
{
    let mut current = initial;
    loop {
        match step(current).run(env).await? {
            StepOutcome::Continue(next) => current = next,
            StepOutcome::Done(value) => return Ok(value),
        }
    }
}
