//! Курсор по входной строке с преобразованиями в духе `scanf`: `%f` и `%c`.
//!
//! # Пример
//!
//! ```
//! use calculadora::scan::Scanner;
//!
//! let mut scanner = Scanner::new("  2.5e1+x");
//! assert_eq!(scanner.read_float(), Ok(25.0));
//! assert_eq!(scanner.read_char(), Ok('+'));
//! assert_eq!(scanner.rest(), "x");
//! ```

use std::fmt::Display;

use thiserror::Error;

/// Ошибка преобразования.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("позиция {pos}: {kind}")]
pub struct ScanError {
    /// Позиция ошибки во входной строке (в байтах).
    pub pos: usize,
    /// Тип ошибки.
    pub kind: ScanErrorKind,
}

impl ScanError {
    const fn new(pos: usize, kind: ScanErrorKind) -> Self {
        Self { pos, kind }
    }
}

/// Тип ошибки преобразования.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ScanErrorKind {
    /// Ввод закончился до преобразования.
    EndOfInput,
    /// На месте числа стоит другой символ.
    ExpectedNumber(char),
}

impl Display for ScanErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "неожиданный конец ввода"),
            Self::ExpectedNumber(ch) => write!(f, "ожидалось число, найдено '{ch}'"),
        }
    }
}

/// Курсор по входной строке.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Создаёт курсор в начале строки.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Текущая позиция в байтах от начала исходной строки.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Непрочитанный остаток.
    #[must_use]
    pub const fn rest(&self) -> &'a str {
        self.input
    }

    fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let mut chars = self.input.chars();
        let ch = chars.next()?;
        self.input = chars.as_str();
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let byte_len: usize = self
            .input
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let (consumed, rest) = self.input.split_at(byte_len);
        self.pos += byte_len;
        self.input = rest;
        consumed
    }

    /// Пропускает любое количество пробельных символов, в том числе ни одного.
    pub fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }

    /// Преобразование `%c`: ровно один символ, пробелы не пропускаются.
    ///
    /// # Ошибки
    ///
    /// [`ScanErrorKind::EndOfInput`], если строка закончилась.
    pub fn read_char(&mut self) -> Result<char, ScanError> {
        self.advance()
            .ok_or(ScanError::new(self.pos, ScanErrorKind::EndOfInput))
    }

    /// Преобразование `%f`: пропускает пробелы и читает самый длинный
    /// префикс, который принял бы `strtof`, включая шестнадцатеричную
    /// запись C99 (`0x1.8p3`).
    ///
    /// Экспонента забирается только вместе с цифрами: в `"2e"` прочитается `2`,
    /// а в `"0x"` только `0`.
    /// При ошибке курсор остаётся после пропущенных пробелов.
    ///
    /// # Ошибки
    ///
    /// [`ScanErrorKind::EndOfInput`] на пустом остатке,
    /// [`ScanErrorKind::ExpectedNumber`], если число не начинается.
    pub fn read_float(&mut self) -> Result<f32, ScanError> {
        self.skip_whitespace();

        let start_pos = self.pos;
        let (len, value) = hex_float(self.input)
            .or_else(|| {
                // префикс уже проверен, разбор не может упасть
                float_prefix_len(self.input)
                    .map(|len| (len, self.input[..len].parse().unwrap_or(f32::NAN)))
            })
            .ok_or_else(|| {
                let kind = self
                    .peek()
                    .map_or(ScanErrorKind::EndOfInput, ScanErrorKind::ExpectedNumber);
                ScanError::new(start_pos, kind)
            })?;

        self.input = &self.input[len..];
        self.pos += len;
        Ok(value)
    }
}

/// Шестнадцатеричное число: `[+-]0x` цифры, необязательная точка и
/// двоичная экспонента `p`. Возвращает длину префикса и значение.
fn hex_float(input: &str) -> Option<(usize, f32)> {
    let bytes = input.as_bytes();
    let (negative, mut i) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    if !matches!(bytes.get(i..i + 2), Some([b'0', b'x' | b'X'])) {
        return None;
    }
    i += 2;

    let mut mantissa: u64 = 0;
    let mut exponent: i64 = 0;
    let mut digits = 0;
    let mut seen_point = false;

    while let Some(&b) = bytes.get(i) {
        if b == b'.' && !seen_point {
            seen_point = true;
        } else if let Some(d) = char::from(b).to_digit(16) {
            digits += 1;
            if mantissa >> 60 == 0 {
                mantissa = (mantissa << 4) | u64::from(d);
                if seen_point {
                    exponent -= 4;
                }
            } else if !seen_point {
                // младшие цифры не помещаются в мантиссу
                exponent += 4;
            }
        } else {
            break;
        }
        i += 1;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'p' | b'P')) {
        let mut j = i + 1;
        let exp_negative = bytes.get(j) == Some(&b'-');
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            let value = bytes[j..j + exp_digits]
                .iter()
                .fold(0_i64, |acc, b| (acc * 10 + i64::from(b - b'0')).min(100_000));
            exponent += if exp_negative { -value } else { value };
            i = j + exp_digits;
        }
    }

    let value = if mantissa == 0 {
        0.0
    } else {
        let exponent = exponent.clamp(-2000, 2000) as i32;
        (mantissa as f64 * 2_f64.powi(exponent)) as f32
    };

    Some((i, if negative { -value } else { value }))
}

/// Длина префикса в байтах, который является числом, или `None`.
fn float_prefix_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if let Some(len) = special_len(&input[i..]) {
        return Some(i + len);
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    Some(i)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `infinity`, `inf` или `nan` без учёта регистра.
fn special_len(input: &str) -> Option<usize> {
    ["infinity", "inf", "nan"]
        .into_iter()
        .find(|word| {
            input
                .get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word))
        })
        .map(str::len)
}
