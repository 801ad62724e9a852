//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::error::Result;
use std::io::{BufRead, Write};

pub trait ReadFormat {
    type Output;

    fn read<R: BufRead>(r: R) -> Result<Self::Output>;
}

/// Запись таблицы записей `T` целиком.
pub trait WriteFormat<T> {
    fn write<W: Write>(w: W, rows: &[T]) -> Result<()>;
}
