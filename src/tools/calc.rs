//! Arithmetic calculator tool.
//!
//! A small recursive-descent parser restricted to decimal literals, the four
//! basic operators, unary minus, and parentheses. Expressions are parsed and
//! evaluated directly; there is no generic expression evaluator behind this,
//! so hostile input can at worst produce a syntax error.

use async_trait::async_trait;
use serde::Deserialize;

use super::registry::{InputSchema, ToolDefinition, ToolHandler, ToolOutput};
use super::parse_arguments;

/// Handler for the `calculate` tool.
pub struct CalculateTool;

#[derive(Debug, Deserialize)]
struct CalculateArgs {
  expression: String,
}

#[async_trait]
impl ToolHandler for CalculateTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("calculate", "Perform mathematical calculations safely").with_schema(
      InputSchema::new()
        .with_property(
          "expression",
          serde_json::json!({
            "type": "string",
            "description": "A mathematical expression to evaluate (e.g., \"2 + 2\", \"10 * 5\")"
          }),
        )
        .with_required(&["expression"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let args: CalculateArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("Error calculating: {msg}")),
    };

    match evaluate(&args.expression) {
      Ok(result) => ToolOutput::success(format!("{} = {}", args.expression, format_number(result))),
      Err(err) => ToolOutput::error(format!("Error calculating: {err}")),
    }
  }
}

/// Evaluate an arithmetic expression.
///
/// # Errors
/// Returns a description of the first syntax error, unknown character, or
/// division by zero encountered.
pub fn evaluate(expression: &str) -> Result<f64, String> {
  let tokens = tokenize(expression)?;
  let mut parser = Parser { tokens, position: 0 };
  let value = parser.expression()?;
  match parser.peek() {
    None => Ok(value),
    Some(token) => Err(format!("unexpected token {token}")),
  }
}

fn format_number(value: f64) -> String {
  if value.fract() == 0.0 && value.abs() < 1e15 {
    format!("{}", value as i64)
  } else {
    format!("{value}")
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
  Number(f64),
  Plus,
  Minus,
  Star,
  Slash,
  OpenParen,
  CloseParen,
}

impl std::fmt::Display for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Number(n) => write!(f, "'{n}'"),
      Self::Plus => write!(f, "'+'"),
      Self::Minus => write!(f, "'-'"),
      Self::Star => write!(f, "'*'"),
      Self::Slash => write!(f, "'/'"),
      Self::OpenParen => write!(f, "'('"),
      Self::CloseParen => write!(f, "')'"),
    }
  }
}

fn tokenize(expression: &str) -> Result<Vec<Token>, String> {
  let mut tokens = Vec::new();
  let mut chars = expression.chars().peekable();

  while let Some(&c) = chars.peek() {
    match c {
      ' ' | '\t' => {
        chars.next();
      }
      '+' => {
        chars.next();
        tokens.push(Token::Plus);
      }
      '-' => {
        chars.next();
        tokens.push(Token::Minus);
      }
      '*' => {
        chars.next();
        tokens.push(Token::Star);
      }
      '/' => {
        chars.next();
        tokens.push(Token::Slash);
      }
      '(' => {
        chars.next();
        tokens.push(Token::OpenParen);
      }
      ')' => {
        chars.next();
        tokens.push(Token::CloseParen);
      }
      '0'..='9' | '.' => {
        let mut literal = String::new();
        while let Some(&d) = chars.peek() {
          if d.is_ascii_digit() || d == '.' {
            literal.push(d);
            chars.next();
          } else {
            break;
          }
        }
        let number = literal
          .parse::<f64>()
          .map_err(|_| format!("invalid number '{literal}'"))?;
        tokens.push(Token::Number(number));
      }
      other => {
        return Err(format!(
          "invalid character '{other}' in expression. Only numbers and basic operators (+, -, *, /) are allowed."
        ));
      }
    }
  }

  Ok(tokens)
}

struct Parser {
  tokens: Vec<Token>,
  position: usize,
}

impl Parser {
  fn peek(&self) -> Option<Token> {
    self.tokens.get(self.position).copied()
  }

  fn advance(&mut self) -> Option<Token> {
    let token = self.peek();
    if token.is_some() {
      self.position += 1;
    }
    token
  }

  fn expression(&mut self) -> Result<f64, String> {
    let mut value = self.term()?;
    while let Some(token) = self.peek() {
      match token {
        Token::Plus => {
          self.advance();
          value += self.term()?;
        }
        Token::Minus => {
          self.advance();
          value -= self.term()?;
        }
        _ => break,
      }
    }
    Ok(value)
  }

  fn term(&mut self) -> Result<f64, String> {
    let mut value = self.factor()?;
    while let Some(token) = self.peek() {
      match token {
        Token::Star => {
          self.advance();
          value *= self.factor()?;
        }
        Token::Slash => {
          self.advance();
          let divisor = self.factor()?;
          if divisor == 0.0 {
            return Err("division by zero".to_string());
          }
          value /= divisor;
        }
        _ => break,
      }
    }
    Ok(value)
  }

  fn factor(&mut self) -> Result<f64, String> {
    match self.advance() {
      Some(Token::Number(n)) => Ok(n),
      Some(Token::Minus) => Ok(-self.factor()?),
      Some(Token::OpenParen) => {
        let value = self.expression()?;
        match self.advance() {
          Some(Token::CloseParen) => Ok(value),
          Some(token) => Err(format!("expected ')' but found {token}")),
          None => Err("expected ')' but reached end of expression".to_string()),
        }
      }
      Some(token) => Err(format!("unexpected token {token}")),
      None => Err("unexpected end of expression".to_string()),
    }
  }
}
