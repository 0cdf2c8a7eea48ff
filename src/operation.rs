//! Четыре арифметические операции над `f32` и выбор операции по символу.
//!
//! # Примеры
//!
//! ```
//! use calculadora::operation::{Operator, EvalError};
//!
//! assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
//! assert_eq!(Operator::from_symbol('/'), Some(Operator::Div));
//! assert_eq!(Operator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
//! ```

use thiserror::Error;

/// Ошибки при вычислении.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Сложение.
#[must_use]
pub fn add(a: f32, b: f32) -> f32 {
    a + b
}

/// Вычитание.
#[must_use]
pub fn subtract(a: f32, b: f32) -> f32 {
    a - b
}

/// Умножение.
#[must_use]
pub fn multiply(a: f32, b: f32) -> f32 {
    a * b
}

/// Деление.
///
/// # Ошибки
///
/// Возвращает [`EvalError::DivisionByZero`], если `b == 0` (в том числе `-0.0`).
pub fn divide(a: f32, b: f32) -> Result<f32, EvalError> {
    if b == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(a / b)
}

/// Бинарные операции калькулятора.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Операция для символа или `None`, если символ не оператор.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить операцию к операндам.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::DivisionByZero`] при делении на ноль.
    pub fn apply(self, left: f32, right: f32) -> Result<f32, EvalError> {
        match self {
            Self::Add => Ok(add(left, right)),
            Self::Sub => Ok(subtract(left, right)),
            Self::Mul => Ok(multiply(left, right)),
            Self::Div => divide(left, right),
        }
    }
}
