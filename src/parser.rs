//! Разбор строки по фиксированному шаблону `%f %c %f`.
//!
//! ```text
//! request = float ws char ws float
//! ws      = whitespace*
//! ```
//!
//! Как и `scanf`, разбор останавливается на первом неудачном преобразовании.
//! Пробелы в шаблоне и `%f` пропускают и переводы строк, поэтому
//! [`read_request`] дочитывает новые строки, пока ввод просто кончился.
//! Несопоставленные поля сохраняют начальные значения: `0.0` для чисел
//! и `'\0'` для оператора. Ошибкой это не считается.
//!
//! # Примеры
//!
//! ```
//! use calculadora::parser::parse;
//!
//! let request = parse("3 + 4");
//! assert_eq!((request.left, request.operator, request.right), (3.0, '+', 4.0));
//! assert!(request.is_complete());
//!
//! let request = parse("abc");
//! assert_eq!(request.matched, 0);
//! assert_eq!(request.operator, '\0');
//! ```

use std::io::{self, BufRead};

use crate::scan::{ScanError, ScanErrorKind, Scanner};

/// Число преобразований в шаблоне.
pub const CONVERSIONS: usize = 3;

/// Результат разбора строки.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    /// Левый операнд.
    pub left: f32,
    /// Символ оператора.
    pub operator: char,
    /// Правый операнд.
    pub right: f32,
    /// Сколько преобразований прошло успешно (0..=3).
    pub matched: usize,
    /// Ошибка, на которой разбор остановился.
    pub failure: Option<ScanError>,
}

impl Request {
    /// Все три поля сопоставлены.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.matched == CONVERSIONS
    }

    /// Разбор упёрся в конец ввода, а не в чужой символ.
    #[must_use]
    pub fn needs_more_input(&self) -> bool {
        matches!(
            self.failure,
            Some(ScanError {
                kind: ScanErrorKind::EndOfInput,
                ..
            })
        )
    }
}

/// Читает строки из `input`, пока шаблон не заполнится, не встретится
/// несовпадение или не кончится поток.
///
/// Остаток строки после третьего поля не читается и не разбирается.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибке чтения.
///
/// ```
/// use calculadora::parser::read_request;
///
/// let mut input = "10 +\n5\nlo que sigue".as_bytes();
/// let request = read_request(&mut input).unwrap();
/// assert_eq!((request.left, request.operator, request.right), (10.0, '+', 5.0));
/// assert_eq!(input, b"lo que sigue");
/// ```
pub fn read_request<R: BufRead>(input: &mut R) -> io::Result<Request> {
    let mut buf = Vec::new();
    loop {
        let read = input.read_until(b'\n', &mut buf)?;
        let request = parse(&String::from_utf8_lossy(&buf));
        if read == 0 || !request.needs_more_input() {
            return Ok(request);
        }
    }
}

/// Разбирает строку по шаблону `%f %c %f`.
#[must_use]
pub fn parse(input: &str) -> Request {
    let mut scanner = Scanner::new(input);
    let mut request = Request::default();

    if let Err(err) = scan_into(&mut scanner, &mut request) {
        request.failure = Some(err);
    }

    request
}

fn scan_into(scanner: &mut Scanner<'_>, request: &mut Request) -> Result<(), ScanError> {
    request.left = scanner.read_float()?;
    request.matched += 1;

    scanner.skip_whitespace();
    request.operator = scanner.read_char()?;
    request.matched += 1;

    scanner.skip_whitespace();
    request.right = scanner.read_float()?;
    request.matched += 1;

    Ok(())
}
