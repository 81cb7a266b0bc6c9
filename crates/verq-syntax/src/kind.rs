//! Syntax kinds for the Verilog concrete syntax tree.
//!
//! `SyntaxKind` serves dual roles: token kinds (leaves) and node kinds (grammar productions).
//! Only the productions the query layer navigates are enumerated; everything else a parser
//! produces can be folded into the generic kinds near the end of the node block.
//! `VerilogLang` implements Rowan's `Language` trait for tree construction.

use rowan::Language;

use crate::slots;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Port direction keywords ---
    KwInput = 0,
    KwOutput,
    KwInout,
    KwRef,

    // --- Other keywords ---
    KwModule,
    KwEndmodule,
    KwTask,
    KwEndtask,
    KwFunction,
    KwEndfunction,
    KwWire,
    KwVar,
    KwReg,
    KwLogic,
    KwBit,
    KwInt,
    KwInteger,
    KwSigned,
    KwUnsigned,

    /// Plain identifier: `data_in`
    SymbolIdentifier,
    /// Escaped identifier: `\bus[0] `
    EscapedIdentifier,

    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    Dot,
    Comma,
    Colon,
    Semicolon,
    Equals,
    DecNumber,

    Whitespace,
    Newline,
    LineComment,
    BlockComment,

    /// Token the parser could not place; also usable as a recovery node.
    Error,

    // --- Node kinds (non-terminals) ---
    /// Top-level list of descriptions (source file root).
    DescriptionList,
    ModuleDeclaration,
    ModuleHeader,
    /// ANSI-style port list in a module header.
    PortDeclarationList,
    /// ANSI-style header port: `input wire [3:0] a [2]`
    PortDeclaration,
    /// Non-ANSI port list in a module header: `(a, b, c)`
    PortList,
    /// One entry of a non-ANSI port list.
    Port,
    PortReference,
    ModuleItemList,
    /// Module-body port declaration: `input wire [3:0] a;`
    ModulePortDeclaration,
    TaskDeclaration,
    FunctionDeclaration,
    PortItemList,
    /// Task/function formal argument.
    PortItem,
    DataTypeImplicitBasicIdDimensions,
    DataType,
    IdentifierList,
    IdentifierUnpackedDimensions,
    /// Wrapper around a plain identifier with optional parameter values.
    UnqualifiedId,
    PackedDimensions,
    UnpackedDimensions,
    DimensionRange,
    InstantiationBase,
    GateInstance,
    PortActualList,
    /// `.name(value)` connection in an instance port list.
    ActualNamedPort,
    ActualPositionalPort,
    ParenGroup,
    Expression,
    Reference,
    /// Placeholder for an absent optional grammar element.
    Empty,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        token_sets::TRIVIA.contains(self)
    }

    #[inline]
    pub fn is_identifier(self) -> bool {
        token_sets::IDENTIFIERS.contains(self)
    }

    #[inline]
    pub fn is_direction(self) -> bool {
        token_sets::DIRECTIONS.contains(self)
    }

    /// Node kinds start right after the token block. `Error` is valid for both.
    #[inline]
    pub fn is_node(self) -> bool {
        self == Error || (self as u16 >= DescriptionList as u16 && self != __LAST)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= Error as u16
    }

    /// Fixed slot count of a production, when the grammar fixes one.
    ///
    /// List-like productions return `None`. A node may carry fewer slots than its arity
    /// (partially recovered parse); it never legitimately carries more.
    pub fn arity(self) -> Option<usize> {
        let n = match self {
            PortDeclaration => slots::port_declaration::ARITY,
            ModulePortDeclaration => slots::module_port_declaration::ARITY,
            Port => slots::port::ARITY,
            PortReference => slots::port_reference::ARITY,
            PortItem => slots::port_item::ARITY,
            DataTypeImplicitBasicIdDimensions => slots::type_id_dimensions::ARITY,
            ActualNamedPort => slots::actual_named_port::ARITY,
            IdentifierUnpackedDimensions => slots::identifier_unpacked_dimensions::ARITY,
            UnqualifiedId => slots::unqualified_id::ARITY,
            _ => return None,
        };
        Some(n)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerilogLang {}

impl Language for VerilogLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<VerilogLang>;
pub type SyntaxToken = rowan::SyntaxToken<VerilogLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// Bitset of token kinds. Only kinds below 64 fit, which the token block respects.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                list.entry(&VerilogLang::kind_from_raw(rowan::SyntaxKind(i)));
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets.
pub mod token_sets {
    use super::*;

    pub const DIRECTIONS: TokenSet = TokenSet::new(&[KwInput, KwOutput, KwInout, KwRef]);

    pub const IDENTIFIERS: TokenSet = TokenSet::new(&[SymbolIdentifier, EscapedIdentifier]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);
}
