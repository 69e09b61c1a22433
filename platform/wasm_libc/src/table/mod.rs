//! A const-evaluable model of the WebAssembly integer table.
//!
//! [`resolve`] maps a category and an addressing mode to its width and range.
//! Unlike the C-named items in [`stdint`](crate::stdint), which only exist for
//! the mode of the current build, the model covers both modes, so tooling can
//! inspect the table of a target it is not compiled for.

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use log::{debug, info};

mod error;

pub use error::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AddressingMode {
    Wasm32,
    Wasm64,
}

impl AddressingMode {
    #[cfg(target_pointer_width = "64")]
    pub const TARGET: Self = Self::Wasm64;
    #[cfg(target_pointer_width = "32")]
    pub const TARGET: Self = Self::Wasm32;

    pub const fn pointer_width(self) -> u32 {
        match self {
            Self::Wasm32 => 32,
            Self::Wasm64 => 64,
        }
    }

    pub const fn from_pointer_width(bits: u32) -> Result<Self, AddressingModeError> {
        match bits {
            32 => Ok(Self::Wasm32),
            64 => Ok(Self::Wasm64),
            _ => Err(AddressingModeError::UnsupportedPointerWidth(bits)),
        }
    }

    /// The architecture name as it appears in a target triple.
    pub const fn arch(self) -> &'static str {
        match self {
            Self::Wasm32 => "wasm32",
            Self::Wasm64 => "wasm64",
        }
    }
}

impl Display for AddressingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.arch())
    }
}

/// Accepts an architecture name (`wasm64`) or a full target triple
/// (`wasm32-unknown-unknown`, `wasm32-wasip1`).
impl FromStr for AddressingMode {
    type Err = AddressingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arch = s.split('-').next().unwrap_or_default();
        match arch {
            "wasm32" => Ok(Self::Wasm32),
            "wasm64" => Ok(Self::Wasm64),
            _ => Err(AddressingModeError::UnrecognizedTarget),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Category {
    IntFast16,
    UintFast16,
    IntFast32,
    UintFast32,
    Intptr,
    Uintptr,
    Ptrdiff,
    Size,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::IntFast16,
        Self::UintFast16,
        Self::IntFast32,
        Self::UintFast32,
        Self::Intptr,
        Self::Uintptr,
        Self::Ptrdiff,
        Self::Size,
    ];

    /// Position of this category in [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The C type this category describes.
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::IntFast16 => "int_fast16_t",
            Self::UintFast16 => "uint_fast16_t",
            Self::IntFast32 => "int_fast32_t",
            Self::UintFast32 => "uint_fast32_t",
            Self::Intptr => "intptr_t",
            Self::Uintptr => "uintptr_t",
            Self::Ptrdiff => "ptrdiff_t",
            Self::Size => "size_t",
        }
    }

    pub const fn signedness(self) -> Signedness {
        match self {
            Self::IntFast16 | Self::IntFast32 | Self::Intptr | Self::Ptrdiff => Signedness::Signed,
            Self::UintFast16 | Self::UintFast32 | Self::Uintptr | Self::Size => {
                Signedness::Unsigned
            }
        }
    }

    pub const fn is_pointer_width_dependent(self) -> bool {
        matches!(
            self,
            Self::Intptr | Self::Uintptr | Self::Ptrdiff | Self::Size
        )
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.c_name())
    }
}

/// Width and two's-complement range of an integer type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Limits {
    pub bits: u32,
    pub signedness: Signedness,
    pub min: i128,
    pub max: u128,
}

impl Limits {
    /// # Panics
    /// If `bits` is not in `1..=64`.
    pub const fn signed(bits: u32) -> Self {
        assert!(bits >= 1 && bits <= 64, "integer width must be 1 to 64 bits");
        let max = (1_i128 << (bits - 1)) - 1;
        Self {
            bits,
            signedness: Signedness::Signed,
            min: -max - 1,
            max: max as u128,
        }
    }

    /// # Panics
    /// If `bits` is not in `1..=64`.
    pub const fn unsigned(bits: u32) -> Self {
        assert!(bits >= 1 && bits <= 64, "integer width must be 1 to 64 bits");
        Self {
            bits,
            signedness: Signedness::Unsigned,
            min: 0,
            max: (1_u128 << bits) - 1,
        }
    }

    const fn of(signedness: Signedness, bits: u32) -> Self {
        match signedness {
            Signedness::Signed => Self::signed(bits),
            Signedness::Unsigned => Self::unsigned(bits),
        }
    }
}

/// Resolves the width and range of `category` under `mode`.
pub const fn resolve(category: Category, mode: AddressingMode) -> Limits {
    let bits = match category {
        Category::IntFast16 | Category::UintFast16 => 16,
        Category::IntFast32 | Category::UintFast32 => 32,
        Category::Intptr | Category::Uintptr | Category::Ptrdiff | Category::Size => {
            mode.pointer_width()
        }
    };
    Limits::of(category.signedness(), bits)
}

/// All categories resolved for one addressing mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Table {
    mode: AddressingMode,
    entries: [(Category, Limits); 8],
}

impl Table {
    pub const fn for_mode(mode: AddressingMode) -> Self {
        let mut entries = [(Category::IntFast16, Limits::signed(16)); 8];
        let mut i = 0;
        while i < Category::ALL.len() {
            let category = Category::ALL[i];
            entries[i] = (category, resolve(category, mode));
            i += 1;
        }
        Self { mode, entries }
    }

    pub const fn target() -> Self {
        Self::for_mode(AddressingMode::TARGET)
    }

    pub const fn mode(&self) -> AddressingMode {
        self.mode
    }

    pub const fn get(&self, category: Category) -> Limits {
        self.entries[category.index()].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Limits)> + '_ {
        self.entries.iter().copied()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}:", self.mode)?;
        for (category, limits) in self.iter() {
            writeln!(
                f,
                "  {:<14} {:>2} bit  [{}, {}]",
                category.c_name(),
                limits.bits,
                limits.min,
                limits.max
            )?;
        }
        Ok(())
    }
}

pub fn log_table(table: &Table) {
    info!("integer table for {}", table.mode());
    for (category, limits) in table.iter() {
        debug!(
            "{category}: {} bit {:?}, min={}, max={}",
            limits.bits, limits.signedness, limits.min, limits.max
        );
    }
}
