use crate::varying::ir::VaryingNode;
use crate::varying::semantic::{VaryingSemantic, evaluate};

/// Text emitted for constructs with no shading-language equivalent.
pub const UNSUPPORTED_RANDOM: &str = "<random-not-supported>";

/// Text emitted for NaN and infinite literals.
pub const UNSUPPORTED_LITERAL: &str = "<non-finite-not-supported>";

/// Integer-looking literals at or above this magnitude switch to exponent form.
const EXPONENT_THRESHOLD: f32 = 1e7;

/// A shading-language expression in `t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderCode {
    /// Single-line infix expression.
    pub text: String,
    /// Number of [`UNSUPPORTED_RANDOM`] and [`UNSUPPORTED_LITERAL`] markers inside `text`.
    pub unsupported: usize,
}

impl ShaderCode {
    /// Return `true` when the text is usable as-is.
    pub fn is_valid(&self) -> bool {
        self.unsupported == 0
    }
}

impl std::fmt::Display for ShaderCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders HLSL-style expressions: `t`, literals, `(a + b)`, `(a * b)`, `lerp(x, y, s)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShaderCodegen;

impl VaryingSemantic for ShaderCodegen {
    type Output = ShaderCode;

    fn symbol(&self, _node: &VaryingNode) -> ShaderCode {
        ShaderCode {
            text: "t".to_owned(),
            unsupported: 0,
        }
    }

    fn random(&self, _node: &VaryingNode) -> ShaderCode {
        ShaderCode {
            text: UNSUPPORTED_RANDOM.to_owned(),
            unsupported: 1,
        }
    }

    fn literal(&self, _node: &VaryingNode, value: f32) -> ShaderCode {
        if !value.is_finite() {
            return ShaderCode {
                text: UNSUPPORTED_LITERAL.to_owned(),
                unsupported: 1,
            };
        }
        ShaderCode {
            text: float_literal(value),
            unsupported: 0,
        }
    }

    fn add(&self, _node: &VaryingNode, left: ShaderCode, right: ShaderCode) -> ShaderCode {
        ShaderCode {
            text: format!("({} + {})", left.text, right.text),
            unsupported: left.unsupported + right.unsupported,
        }
    }

    fn multiply(&self, _node: &VaryingNode, left: ShaderCode, right: ShaderCode) -> ShaderCode {
        ShaderCode {
            text: format!("({} * {})", left.text, right.text),
            unsupported: left.unsupported + right.unsupported,
        }
    }

    fn lerp(&self, _node: &VaryingNode, x: ShaderCode, y: ShaderCode, s: ShaderCode) -> ShaderCode {
        ShaderCode {
            text: format!("lerp({}, {}, {})", x.text, y.text, s.text),
            unsupported: x.unsupported + y.unsupported + s.unsupported,
        }
    }
}

/// Shortest display form, unless that would read as an overflowing integer literal.
fn float_literal(value: f32) -> String {
    let text = format!("{value}");
    if !text.contains('.') && value.abs() >= EXPONENT_THRESHOLD {
        format!("{value:e}")
    } else {
        text
    }
}

/// Render `node` as a shading-language expression.
pub fn to_shader_code(node: &VaryingNode) -> ShaderCode {
    evaluate(node, &ShaderCodegen)
}

#[cfg(test)]
#[path = "../../tests/unit/varying/codegen.rs"]
mod tests;
