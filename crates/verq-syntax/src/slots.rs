//! Positional slot contracts per grammar production.
//!
//! Every accessor that reaches into a node by offset names the offset from here.
//! Adding a port-like construct means adding a module below, not touching the
//! traversal code. Trivia never occupies a slot.

/// `PortDeclaration`: ANSI-style header port.
///
/// `input wire [7:0] data [4]` → `[KwInput, KwWire, DataType, UnqualifiedId, UnpackedDimensions]`
pub mod port_declaration {
    pub const DIRECTION: usize = 0;
    pub const NET_OR_VAR: usize = 1;
    pub const DATA_TYPE: usize = 2;
    pub const IDENTIFIER: usize = 3;
    pub const UNPACKED_DIMENSIONS: usize = 4;
    pub const ARITY: usize = 5;
}

/// `ModulePortDeclaration`: port declared in a module body.
///
/// `output reg [3:0] q;` → `[KwOutput, KwReg, DataType, IdentifierUnpackedDimensions, Semicolon]`.
/// The identifier slot holds either one `IdentifierUnpackedDimensions` or an `IdentifierList`
/// of them.
pub mod module_port_declaration {
    pub const DIRECTION: usize = 0;
    pub const NET_OR_VAR: usize = 1;
    pub const DATA_TYPE: usize = 2;
    pub const IDENTIFIERS: usize = 3;
    pub const SEMICOLON: usize = 4;
    pub const ARITY: usize = 5;
}

/// `Port`: one entry of a non-ANSI port list.
pub mod port {
    pub const REFERENCE: usize = 0;
    pub const ARITY: usize = 1;
}

/// `PortReference`: `name` or `name[3:0]`.
pub mod port_reference {
    pub const IDENTIFIER: usize = 0;
    pub const SELECT: usize = 1;
    pub const ARITY: usize = 2;
}

/// `PortItem`: task/function formal argument.
///
/// `input logic [1:0] sel [2] = 0` → `[KwInput, DataTypeImplicitBasicIdDimensions, Expression]`
pub mod port_item {
    pub const DIRECTION: usize = 0;
    pub const TYPE_ID_DIMENSIONS: usize = 1;
    pub const DEFAULT_VALUE: usize = 2;
    pub const ARITY: usize = 3;
}

/// `DataTypeImplicitBasicIdDimensions`: type, name and unpacked dimensions of a formal.
pub mod type_id_dimensions {
    pub const DATA_TYPE: usize = 0;
    pub const IDENTIFIER: usize = 1;
    pub const UNPACKED_DIMENSIONS: usize = 2;
    pub const ARITY: usize = 3;
}

/// `ActualNamedPort`: `.name(value)`.
pub mod actual_named_port {
    pub const DOT: usize = 0;
    pub const NAME: usize = 1;
    pub const PAREN_GROUP: usize = 2;
    pub const ARITY: usize = 3;
}

/// `IdentifierUnpackedDimensions`: `name [3][4]`.
pub mod identifier_unpacked_dimensions {
    pub const IDENTIFIER: usize = 0;
    pub const UNPACKED_DIMENSIONS: usize = 1;
    pub const ARITY: usize = 2;
}

/// `UnqualifiedId`: identifier plus optional parameter value list.
pub mod unqualified_id {
    pub const IDENTIFIER: usize = 0;
    pub const PARAMETERS: usize = 1;
    pub const ARITY: usize = 2;
}
