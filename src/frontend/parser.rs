use crate::foundation::error::{VaryingError, VaryingResult};
use crate::frontend::lexer::{Span, Token, TokenKind, lex};
use crate::varying::ir::{self, VaryingNode};

/// Parse a varying from text.
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary ('*' unary)*
/// unary   := '-' unary | primary
/// primary := number | 't' | 'rand' '(' ')' | 'lerp' '(' expr ',' expr ',' expr ')' | '(' expr ')'
/// ```
///
/// A leading `=` is accepted and ignored. Error offsets are byte offsets into the trimmed source
/// with that prefix removed.
pub fn parse(src: &str) -> VaryingResult<VaryingNode> {
    let src = src.trim();
    let src = src.strip_prefix('=').unwrap_or(src);
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let node = p.parse_expr()?;
    p.expect(TokenKind::Eof)?;
    Ok(node)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> &Token {
        let t = &self.tokens[self.pos];
        if t.kind != TokenKind::Eof {
            self.pos += 1;
        }
        t
    }

    fn span(&self) -> Span {
        self.peek().span
    }

    fn expect(&mut self, kind: TokenKind) -> VaryingResult<()> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(VaryingError::parse(
                self.span().start,
                format!("expected {kind:?}, found {:?}", self.peek().kind),
            ))
        }
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn parse_expr(&mut self) -> VaryingResult<VaryingNode> {
        let mut e = self.parse_term()?;
        loop {
            if self.consume(TokenKind::Plus) {
                let r = self.parse_term()?;
                e = ir::add(e, r);
            } else if self.consume(TokenKind::Minus) {
                let r = self.parse_term()?;
                e = ir::subtract(e, r);
            } else {
                break;
            }
        }
        Ok(e)
    }

    fn parse_term(&mut self) -> VaryingResult<VaryingNode> {
        let mut e = self.parse_unary()?;
        while self.consume(TokenKind::Star) {
            let r = self.parse_unary()?;
            e = ir::multiply(e, r);
        }
        Ok(e)
    }

    fn parse_unary(&mut self) -> VaryingResult<VaryingNode> {
        if self.consume(TokenKind::Minus) {
            return Ok(match self.parse_unary()? {
                VaryingNode::Literal(v) => ir::literal(-v),
                e => ir::multiply(ir::literal(-1.0), e),
            });
        }
        self.parse_primary()
    }

    fn parse_args(&mut self) -> VaryingResult<Vec<VaryingNode>> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.consume(TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if self.consume(TokenKind::Comma) {
                continue;
            }
            self.expect(TokenKind::RParen)?;
            return Ok(args);
        }
    }

    fn parse_primary(&mut self) -> VaryingResult<VaryingNode> {
        let t = self.bump().clone();
        match t.kind {
            TokenKind::Number(v) => Ok(ir::literal(v)),
            TokenKind::Ident(name) => match name.as_str() {
                "t" => Ok(ir::symbol()),
                "rand" => {
                    let args = self.parse_args()?;
                    if !args.is_empty() {
                        return Err(arity_error(t.span, "rand", 0, args.len()));
                    }
                    Ok(ir::random())
                }
                "lerp" => {
                    let args = self.parse_args()?;
                    match <[VaryingNode; 3]>::try_from(args) {
                        Ok([x, y, s]) => Ok(ir::lerp(x, y, s)),
                        Err(args) => Err(arity_error(t.span, "lerp", 3, args.len())),
                    }
                }
                other => Err(VaryingError::parse(
                    t.span.start,
                    format!("unknown identifier '{other}'"),
                )),
            },
            TokenKind::LParen => {
                let e = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(e)
            }
            other => Err(VaryingError::parse(
                t.span.start,
                format!("unexpected token {other:?}"),
            )),
        }
    }
}

fn arity_error(span: Span, func: &str, expected: usize, got: usize) -> VaryingError {
    VaryingError::parse(
        span.start,
        format!("{func} expects {expected} argument(s), got {got}"),
    )
}
