//! # calculadora
//!
//! Консольный калькулятор: читает из stdin строку вида
//! `<число> <оператор> <число>`, выполняет одну из четырёх операций
//! и печатает результат с двумя знаками после запятой.
//!
//! Поддерживает:
//! - Числа одинарной точности (`f32`)
//! - Операции: `+`, `-`, `*`, `/`
//!
//! Поведение повторяет учебную программу вместе с её особенностями:
//! ветка `*` по умолчанию завершает работу без вывода
//! (см. [`config::MultiplyMode`]), а при неизвестном операторе после
//! сообщения об ошибке печатается `Resultado: 0.00`.
//!
//! # Пример использования
//!
//! ```
//! use calculadora::{Config, Status, run};
//!
//! let mut out = Vec::new();
//! let status = run("10 + 5\n".as_bytes(), &mut out, &Config::default()).unwrap();
//! assert_eq!(status, Status::Success);
//! assert_eq!(String::from_utf8(out).unwrap(), "Resultado: 15.00\n");
//! ```

pub mod config;
pub mod operation;
pub mod parser;
pub mod scan;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{debug, warn};

pub use config::{Config, MultiplyMode};

use operation::Operator;
use parser::Request;

/// Сообщение для неизвестного оператора.
pub const INVALID_OPERATOR: &str = "Error: Operador no valido";

/// Значение результата на ветке неизвестного оператора.
pub const UNSET_RESULT: f32 = 0.0;

/// Общий тип ошибки калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ошибка вычисления (деление на ноль).
    #[error("{0}")]
    Eval(#[from] operation::EvalError),

    /// Ошибка чтения stdin или записи в stdout.
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),
}

/// Чем закончилась обработка одной строки.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Результат вычислен.
    Computed(f32),
    /// Ветка `*` в режиме [`MultiplyMode::AsIs`]: ничего не печатается.
    EarlyExit,
    /// Оператор не распознан; `result` остаётся начальным значением.
    InvalidOperator { operator: char, result: f32 },
}

/// Код завершения процесса.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
        }
    }
}

/// Выполняет разобранный запрос.
///
/// # Ошибки
///
/// Возвращает [`CalcError::Eval`] при делении на ноль.
///
/// # Примеры
///
/// ```
/// use calculadora::{Config, Outcome, evaluate, parser::parse};
///
/// let config = Config::default();
/// assert_eq!(evaluate(&parse("2 - 3"), &config).unwrap(), Outcome::Computed(-1.0));
/// assert_eq!(evaluate(&parse("2 * 3"), &config).unwrap(), Outcome::EarlyExit);
/// assert!(evaluate(&parse("2 / 0"), &config).is_err());
/// ```
pub fn evaluate(request: &Request, config: &Config) -> Result<Outcome, CalcError> {
    let Some(op) = Operator::from_symbol(request.operator) else {
        warn!(operator = ?request.operator, "неизвестный оператор");
        return Ok(Outcome::InvalidOperator {
            operator: request.operator,
            result: UNSET_RESULT,
        });
    };

    if op == Operator::Mul && config.multiply == MultiplyMode::AsIs {
        debug!("ветка '*': выход без вычисления");
        return Ok(Outcome::EarlyExit);
    }

    debug!(operator = %op.symbol(), "вычисление");
    let result = op.apply(request.left, request.right)?;
    Ok(Outcome::Computed(result))
}

/// Строка результата в формате `%.2f`.
///
/// ```
/// use calculadora::format_result;
///
/// assert_eq!(format_result(15.0), "Resultado: 15.00");
/// assert_eq!(format_result(-1.0 / 3.0), "Resultado: -0.33");
/// assert_eq!(format_result(f32::INFINITY), "Resultado: inf");
/// ```
#[must_use]
pub fn format_result(value: f32) -> String {
    format!("Resultado: {}", format_value(value))
}

/// `inf` и `nan` пишутся как в C, остальное с двумя знаками.
fn format_value(value: f32) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        format!("{sign}nan")
    } else if value.is_infinite() {
        format!("{sign}inf")
    } else {
        format!("{value:.2}")
    }
}

/// Обрабатывает одну строку ввода.
///
/// Читает из `input` столько строк, сколько нужно шаблону `%f %c %f`,
/// печатает результат или сообщение об ошибке в `output` и возвращает
/// код завершения.
///
/// # Ошибки
///
/// Возвращает [`CalcError::Io`] при ошибках чтения/записи.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &Config,
) -> Result<Status, CalcError> {
    if config.prompt {
        write!(output, "{}", config::PROMPT)?;
        output.flush()?;
    }

    let request = parser::read_request(&mut input)?;
    debug!(
        left = ?request.left,
        operator = ?request.operator,
        right = ?request.right,
        matched = request.matched,
        "разобран ввод"
    );
    if let Some(failure) = &request.failure {
        warn!(matched = request.matched, "ввод разобран не полностью: {failure}");
    }

    let status = match evaluate(&request, config) {
        Ok(Outcome::Computed(result)) => {
            writeln!(output, "{}", format_result(result))?;
            Status::Success
        }
        Ok(Outcome::EarlyExit) => Status::Success,
        Ok(Outcome::InvalidOperator { result, .. }) => {
            writeln!(output, "{INVALID_OPERATOR}")?;
            writeln!(output, "{}", format_result(result))?;
            Status::Success
        }
        Err(CalcError::Eval(err)) => {
            warn!("{err}");
            writeln!(output, "Error: {err}")?;
            Status::Failure
        }
        Err(err) => return Err(err),
    };

    output.flush()?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::EvalError;
    use crate::parser::parse;

    fn eval(input: &str) -> Result<Outcome, CalcError> {
        evaluate(&parse(input), &Config::default())
    }

    #[test]
    fn evaluate_simple() {
        assert_eq!(eval("1 + 2").unwrap(), Outcome::Computed(3.0));
        assert_eq!(eval("10 - 3").unwrap(), Outcome::Computed(7.0));
        assert_eq!(eval("15 / 4").unwrap(), Outcome::Computed(3.75));
    }

    #[test]
    fn evaluate_multiply_as_is() {
        assert_eq!(eval("4 * 5").unwrap(), Outcome::EarlyExit);
        assert_eq!(eval("4 * 0").unwrap(), Outcome::EarlyExit);
    }

    #[test]
    fn evaluate_multiply_fixed() {
        let config = Config::default().with_multiply(MultiplyMode::Fixed);
        let outcome = evaluate(&parse("4 * 5"), &config).unwrap();
        assert_eq!(outcome, Outcome::Computed(20.0));
    }

    #[test]
    fn evaluate_division_by_zero() {
        assert!(matches!(
            eval("1 / 0"),
            Err(CalcError::Eval(EvalError::DivisionByZero))
        ));
    }

    #[test]
    fn evaluate_invalid_operator() {
        assert_eq!(
            eval("7 % 2").unwrap(),
            Outcome::InvalidOperator {
                operator: '%',
                result: 0.0
            }
        );
    }

    #[test]
    fn evaluate_unscanned_operator() {
        // оператор не прочитан и остаётся '\0'
        assert_eq!(
            eval("").unwrap(),
            Outcome::InvalidOperator {
                operator: '\0',
                result: 0.0
            }
        );
    }

    #[test]
    fn evaluate_missing_right_operand() {
        // правый операнд остаётся 0.0
        assert_eq!(eval("5 + ").unwrap(), Outcome::Computed(5.0));
        assert!(eval("5 / ").is_err());
    }

    #[test]
    fn format_two_decimals() {
        assert_eq!(format_result(0.0), "Resultado: 0.00");
        assert_eq!(format_result(2.0 / 3.0), "Resultado: 0.67");
        assert_eq!(format_result(1234.5), "Resultado: 1234.50");
        assert_eq!(format_result(-0.0), "Resultado: -0.00");
    }

    #[test]
    fn format_ties_round_like_printf() {
        assert_eq!(format_result(0.125), "Resultado: 0.12");
        assert_eq!(format_result(0.375), "Resultado: 0.38");
        assert_eq!(format_result(0.625), "Resultado: 0.62");
        assert_eq!(format_result(1.125), "Resultado: 1.12");
        assert_eq!(format_result(-0.125), "Resultado: -0.12");
    }

    #[test]
    fn format_non_finite() {
        assert_eq!(format_result(f32::NEG_INFINITY), "Resultado: -inf");
        assert_eq!(format_result(f32::NAN), "Resultado: nan");
        assert_eq!(format_result(-f32::NAN), "Resultado: -nan");
    }

    #[test]
    fn io_error_propagates() {
        struct Broken;

        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("сломано"))
            }
        }

        let mut out = Vec::new();
        let err = run(io::BufReader::new(Broken), &mut out, &Config::default()).unwrap_err();
        assert!(matches!(err, CalcError::Io(_)));
        assert!(out.is_empty());
    }
}
