//! Calculator
//!
//! Display buffer plus a small arithmetic evaluator. Only numeric literals,
//! `+ - * /`, unary signs and whitespace are accepted; `*` and `/` bind
//! tighter than `+` and `-`, equal precedence associates left to right.

/// Shown in place of a result when evaluation fails
pub const ERROR_MARKER: &str = "Error";

/// Evaluation errors
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    Empty,
    UnexpectedChar(char),
    UnexpectedEnd,
    TrailingInput,
    InvalidNumber(String),
    DivisionByZero,
    NonFinite,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::Empty => write!(f, "Empty expression"),
            EvalError::UnexpectedChar(c) => write!(f, "Unexpected character: {}", c),
            EvalError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            EvalError::TrailingInput => write!(f, "Operator expected"),
            EvalError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::NonFinite => write!(f, "Result is not a finite number"),
        }
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

fn tokenize(input: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '+' => { chars.next(); tokens.push(Token::Plus); }
            '-' => { chars.next(); tokens.push(Token::Minus); }
            '*' => { chars.next(); tokens.push(Token::Star); }
            '/' => { chars.next(); tokens.push(Token::Slash); }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[start..end];
                let value = parse_literal(literal)?;
                tokens.push(Token::Number(value));
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

fn parse_literal(literal: &str) -> EvalResult<f64> {
    let digits = literal.chars().filter(|c| c.is_ascii_digit()).count();
    let points = literal.matches('.').count();
    if digits == 0 || points > 1 {
        return Err(EvalError::InvalidNumber(literal.to_string()));
    }
    literal
        .parse::<f64>()
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}

/// Recursive-descent parser over the token stream
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> EvalResult<f64> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.advance();
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> EvalResult<f64> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.advance();
            let rhs = self.factor()?;
            value = if op == Token::Star {
                value * rhs
            } else {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                value / rhs
            };
        }
        Ok(value)
    }

    // factor := ('+' | '-') factor | number
    fn factor(&mut self) -> EvalResult<f64> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::Plus) => self.factor(),
            Some(Token::Star) => Err(EvalError::UnexpectedChar('*')),
            Some(Token::Slash) => Err(EvalError::UnexpectedChar('/')),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression
pub fn evaluate(input: &str) -> EvalResult<f64> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.peek().is_some() {
        // Two numbers in a row, e.g. "1 2"
        return Err(EvalError::TrailingInput);
    }
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// Shortest decimal form; whole numbers print without a fraction
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also normalises -0
        return "0".to_string();
    }
    format!("{}", value)
}

/// Keys the keyboard handler forwards to the buffer
pub fn is_input_key(key: &str) -> bool {
    matches!(key, "+" | "-" | "*" | "/" | ".") || (key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()))
}

/// Calculator display state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    display: String,
}

impl Calculator {
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Append a digit or operator
    pub fn press(&mut self, key: &str) {
        self.display.push_str(key);
    }

    pub fn clear(&mut self) {
        self.display.clear();
    }

    /// Replace the buffer with its value, or with `Error`
    pub fn evaluate(&mut self) {
        self.display = match evaluate(&self.display) {
            Ok(value) => format_number(value),
            Err(e) => {
                log::debug!("calculator: {}", e);
                ERROR_MARKER.to_string()
            }
        };
    }
}
