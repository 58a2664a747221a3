//! Text syntax for varyings: `t`, numbers, `+ - *`, parentheses, `rand()` and `lerp(x, y, s)`.

mod lexer;
mod parser;

pub use parser::parse;
