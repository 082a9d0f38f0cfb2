//! Catalog of every escape sequence the lexer can recognize.
//!
//! Each recognized VT100 sequence maps to exactly one [`EscapeCode`]
//! discriminator. The catalog is closed: sequences outside this set are
//! consumed and discarded by the state machine without producing a token.
//! Display names come from a literal pool that parallels the enum
//! declaration and is materialized into an immutable table exactly once,
//! on first use.

use std::sync::OnceLock;

/// Number of named discriminators declared below.
pub const CATALOG_LEN: usize = 81;

/// Discriminator for a recognized VT100 escape sequence.
///
/// Declared in catalog order; the discriminant doubles as the index into
/// the name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EscapeCode {
    Align,
    AltKeypad,
    Blink,
    Bold,
    ClearBOL,
    ClearBOS,
    ClearEOL,
    ClearEOS,
    ClearLine,
    ClearScreen,
    CursorDn,
    CursorHome,
    CursorLf,
    CursorPos,
    CursorRt,
    CursorUp,
    DevStat,
    DhBot,
    DhTop,
    Dwsh,
    GetCursor,
    HvHome,
    HvPos,
    Ident,
    Index,
    Invisible,
    Led1,
    Led2,
    Led3,
    Led4,
    LedsOff,
    LowInt,
    ModesOff,
    NextLine,
    NumKeypad,
    Reset,
    ResetCol,
    ResetInter,
    ResetRep,
    ResetWrap,
    RestoreCursor,
    Reverse,
    RevIndex,
    SaveCursor,
    SetAltG0,
    SetAltG1,
    SetAltSpecG0,
    SetAltSpecG1,
    SetAppl,
    SetCol,
    SetCursor,
    SetInter,
    SetJump,
    SetLF,
    SetNL,
    SetNormScrn,
    SetOrgAbs,
    SetOrgRel,
    SetRep,
    SetRevScrn,
    SetSmooth,
    SetSpecG0,
    SetSpecG1,
    SetSS2,
    SetSS3,
    SetUKG0,
    SetUKG1,
    SetUSG0,
    SetUSG1,
    SetVT52,
    SetWin,
    SetWrap,
    Swsh,
    TabClr,
    TabClrAll,
    TabSet,
    TestLB,
    TestLBRep,
    TestPU,
    TestPURep,
    Underline,
}

// Literal pool for display names. Order and count must track the enum
// declaration above; the count is checked once when the table is built.
const NAME_POOL: &str = "Align AltKeypad Blink Bold ClearBOL
ClearBOS ClearEOL ClearEOS ClearLine ClearScreen CursorDn CursorHome
CursorLf CursorPos CursorRt CursorUp DevStat DhBot DhTop Dwsh GetCursor
HvHome HvPos Ident Index Invisible Led1 Led2 Led3 Led4 LedsOff LowInt
ModesOff NextLine NumKeypad Reset ResetCol ResetInter ResetRep ResetWrap
RestoreCursor Reverse RevIndex SaveCursor SetAltG0 SetAltG1 SetAltSpecG0
SetAltSpecG1 SetAppl SetCol SetCursor SetInter SetJump SetLF SetNL
SetNormScrn SetOrgAbs SetOrgRel SetRep SetRevScrn SetSmooth SetSpecG0
SetSpecG1 SetSS2 SetSS3 SetUKG0 SetUKG1 SetUSG0 SetUSG1 SetVT52 SetWin
SetWrap Swsh TabClr TabClrAll TabSet TestLB TestLBRep TestPU TestPURep
Underline";

static NAMES: OnceLock<Vec<&'static str>> = OnceLock::new();

fn names() -> &'static [&'static str] {
    NAMES.get_or_init(|| {
        let names: Vec<&'static str> = NAME_POOL.split_whitespace().collect();
        assert_eq!(
            names.len(),
            CATALOG_LEN,
            "catalog name pool out of sync with EscapeCode declaration"
        );
        names
    })
}

impl EscapeCode {
    /// Canonical display name for this discriminator.
    pub fn name(self) -> &'static str {
        names()[self as usize]
    }
}
