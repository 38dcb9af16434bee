use log::debug;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::func::table::Assignment;
use crate::func::token::{self, Operator, Token};
use crate::func::variables::Variables;
use crate::helper::error::{LogiminError, LogiminResult, ParseError};

/// A parsed expression, stored in Reverse Polish Notation
#[derive(Clone, Debug)]
pub struct Expression {
    source: String,
    variables: Variables,
    rpn: Vec<Token>,
}

impl Expression {
    pub fn parse(source: &str) -> LogiminResult<Expression> {
        let tokens = token::tokenize(source);
        let variables = Variables::from_tokens(&tokens);
        let rpn = to_rpn(&tokens)?;
        debug!("Parsed \"{}\" as [{}]", source, rpn.iter().join(" "));
        Ok(Expression {
            source: String::from(source),
            variables,
            rpn,
        })
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn rpn(&self) -> &[Token] {
        &self.rpn
    }

    pub fn eval(&self, assignment: &Assignment) -> LogiminResult<bool> {
        eval_rpn(&self.rpn, assignment)
    }
}

impl FromStr for Expression {
    type Err = LogiminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

/// Convert a list of infix tokens to Reverse Polish Notation (shunting-yard).
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for t in tokens {
        match t {
            Token::Variable(_) => output.push(t.clone()),
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if !op.yields_to(*top) {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(t.clone());
            }
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    None => return Err(ParseError::MismatchedParentheses),
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                }
            },
            Token::Unknown(s) => return Err(ParseError::InvalidToken(s.clone())),
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

/// Evaluate a list of RPN tokens for a given assignment of the variables.
pub fn eval_rpn(rpn: &[Token], assignment: &Assignment) -> LogiminResult<bool> {
    let mut stack: Vec<bool> = Vec::with_capacity(rpn.len());
    for t in rpn {
        match t {
            Token::Variable(c) => match assignment.get(*c) {
                Some(v) => stack.push(v),
                None => return Err(LogiminError::UnassignedVariable(*c)),
            },
            Token::Operator(op) => {
                let right = pop_operand(&mut stack, *op)?;
                let left = if op.is_unary() {
                    false
                } else {
                    pop_operand(&mut stack, *op)?
                };
                stack.push(op.apply(left, right));
            }
            _ => return Err(ParseError::InvalidToken(t.to_string()).into()),
        }
    }

    match stack.len() {
        0 => Err(ParseError::EmptyExpression.into()),
        1 => Ok(stack[0]),
        n => Err(ParseError::DanglingOperands(n).into()),
    }
}

fn pop_operand(stack: &mut Vec<bool>, op: Operator) -> Result<bool, ParseError> {
    stack
        .pop()
        .ok_or_else(|| ParseError::MissingOperand(String::from(op.symbol())))
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpn_of(source: &str) -> Result<Vec<String>, ParseError> {
        to_rpn(&token::tokenize(source)).map(|r| r.iter().map(|t| t.to_string()).collect())
    }

    fn eval_at(source: &str, values: &[(char, bool)]) -> LogiminResult<bool> {
        let e = Expression::parse(source)?;
        e.eval(&Assignment::from_values(values.iter().copied()))
    }

    #[test]
    fn rpn_conversion() {
        assert_eq!(rpn_of("a & b").unwrap(), vec!["a", "b", "&"]);
        assert_eq!(rpn_of("a | b & c").unwrap(), vec!["a", "b", "c", "&", "|"]);
        assert_eq!(rpn_of("( a | b ) & c").unwrap(), vec!["a", "b", "|", "c", "&"]);
        assert_eq!(rpn_of("! a & b").unwrap(), vec!["a", "!", "b", "&"]);
        assert_eq!(rpn_of("! ! a").unwrap(), vec!["a", "!", "!"]);
        assert_eq!(rpn_of("a & b & c").unwrap(), vec!["a", "b", "&", "c", "&"]);
    }

    #[test]
    fn right_associative_implication() {
        assert_eq!(rpn_of("a -> b -> c").unwrap(), vec!["a", "b", "c", "->", "->"]);
        assert_eq!(rpn_of("a ~ b ~ c").unwrap(), vec!["a", "b", "c", "~", "~"]);
        assert_eq!(rpn_of("a -> b ~ c").unwrap(), vec!["a", "b", "->", "c", "~"]);
    }

    #[test]
    fn rpn_errors() {
        assert_eq!(rpn_of("( a & b"), Err(ParseError::MismatchedParentheses));
        assert_eq!(rpn_of("a & b )"), Err(ParseError::MismatchedParentheses));
        assert_eq!(rpn_of(") a ("), Err(ParseError::MismatchedParentheses));
        assert_eq!(
            rpn_of("a & x"),
            Err(ParseError::InvalidToken(String::from("x")))
        );
        assert_eq!(
            rpn_of("a && b"),
            Err(ParseError::InvalidToken(String::from("&&")))
        );
    }

    #[test]
    fn parse_error_propagation() {
        let err = Expression::parse("( a").unwrap_err();
        assert_eq!(
            err.as_parse_error(),
            Some(&ParseError::MismatchedParentheses)
        );
        assert!("a | b".parse::<Expression>().is_ok());
    }

    #[test]
    fn evaluate() {
        assert!(eval_at("a & b", &[('a', true), ('b', true)]).unwrap());
        assert!(!eval_at("a & b", &[('a', true), ('b', false)]).unwrap());
        assert!(eval_at("! a & b", &[('a', false), ('b', true)]).unwrap());
        assert!(!eval_at("a -> b", &[('a', true), ('b', false)]).unwrap());
        assert!(eval_at("a -> b", &[('a', false), ('b', false)]).unwrap());
        assert!(eval_at("a ~ b", &[('a', false), ('b', false)]).unwrap());
        // a -> (b -> c)
        assert!(eval_at("a -> b -> c", &[('a', false), ('b', true), ('c', false)]).unwrap());
        assert!(!eval_at("a -> b -> c", &[('a', true), ('b', true), ('c', false)]).unwrap());
    }

    #[test]
    fn evaluation_errors() {
        let e = Expression::parse("a & b").unwrap();
        let partial = Assignment::from_values(vec![('a', true)]);
        assert!(matches!(
            e.eval(&partial),
            Err(LogiminError::UnassignedVariable('b'))
        ));

        let err = eval_at("a &", &[('a', true)]).unwrap_err();
        assert_eq!(
            err.as_parse_error(),
            Some(&ParseError::MissingOperand(String::from("&")))
        );

        let err = eval_at("a b", &[('a', true), ('b', true)]).unwrap_err();
        assert_eq!(err.as_parse_error(), Some(&ParseError::DanglingOperands(2)));

        let err = eval_at("", &[]).unwrap_err();
        assert_eq!(err.as_parse_error(), Some(&ParseError::EmptyExpression));
    }
}
