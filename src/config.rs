//! Настройки одного запуска.

use clap::ValueEnum;

/// Текст приглашения перед вводом.
pub const PROMPT: &str = "Ingrese la operacion (formato: numero1 operador numero2): ";

/// Поведение ветки `*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MultiplyMode {
    /// Исторический вариант: программа молча завершается с кодом 0.
    #[default]
    AsIs,
    /// Умножение вычисляется и печатается как остальные операции.
    Fixed,
}

/// Настройки калькулятора.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub multiply: MultiplyMode,
    /// Печатать [`PROMPT`] перед чтением строки.
    pub prompt: bool,
}

impl Config {
    #[must_use]
    pub const fn with_multiply(mut self, multiply: MultiplyMode) -> Self {
        self.multiply = multiply;
        self
    }

    #[must_use]
    pub const fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }
}
