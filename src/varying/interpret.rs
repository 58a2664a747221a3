use crate::foundation::rng::RandomSource;
use crate::varying::ir::VaryingNode;
use crate::varying::semantic::{VaryingSemantic, evaluate};

type EvalFn = Box<dyn Fn(f32, &mut dyn RandomSource) -> f32 + Send + Sync>;

/// A varying turned into a callable `t -> value`.
///
/// Randomness comes from the source passed to [`Interpreted::call`]; nothing is cached between
/// calls.
pub struct Interpreted {
    f: EvalFn,
}

impl Interpreted {
    fn new(f: impl Fn(f32, &mut dyn RandomSource) -> f32 + Send + Sync + 'static) -> Self {
        Self { f: Box::new(f) }
    }

    /// Evaluate at time `t`.
    pub fn call(&self, t: f32, rng: &mut dyn RandomSource) -> f32 {
        (self.f)(t, rng)
    }
}

impl std::fmt::Debug for Interpreted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreted").finish_non_exhaustive()
    }
}

/// Direct interpretation semantic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interpreter;

impl VaryingSemantic for Interpreter {
    type Output = Interpreted;

    fn symbol(&self, _node: &VaryingNode) -> Interpreted {
        Interpreted::new(|t, _| t)
    }

    fn random(&self, _node: &VaryingNode) -> Interpreted {
        Interpreted::new(|_, rng| rng.next_f32())
    }

    fn literal(&self, _node: &VaryingNode, value: f32) -> Interpreted {
        Interpreted::new(move |_, _| value)
    }

    fn add(&self, _node: &VaryingNode, left: Interpreted, right: Interpreted) -> Interpreted {
        Interpreted::new(move |t, rng| {
            let a = left.call(t, rng);
            a + right.call(t, rng)
        })
    }

    fn multiply(&self, _node: &VaryingNode, left: Interpreted, right: Interpreted) -> Interpreted {
        Interpreted::new(move |t, rng| {
            let a = left.call(t, rng);
            a * right.call(t, rng)
        })
    }

    fn lerp(
        &self,
        _node: &VaryingNode,
        x: Interpreted,
        y: Interpreted,
        s: Interpreted,
    ) -> Interpreted {
        Interpreted::new(move |t, rng| {
            let s = s.call(t, rng);
            let x = x.call(t, rng);
            let y = y.call(t, rng);
            (1.0 - s) * x + s * y
        })
    }
}

/// Turn `node` into a callable.
pub fn interpret(node: &VaryingNode) -> Interpreted {
    evaluate(node, &Interpreter)
}

#[cfg(test)]
#[path = "../../tests/unit/varying/interpret.rs"]
mod tests;
