//! Tree fixtures shared by unit tests.

use rowan::NodeOrToken;
use verq_syntax::SyntaxKind::{self, *};
use verq_syntax::{SyntaxElement, SyntaxNode, SyntaxTree, TreeBuilder, dump};

use crate::search::SearchMatch;

pub fn build(f: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    f(&mut b);
    b.finish().expect("fixture tree is well-formed")
}

pub fn element(node: &SyntaxNode) -> SyntaxElement {
    NodeOrToken::Node(node.clone())
}

pub fn dump_node(node: &SyntaxNode) -> String {
    dump(&element(node))
}

/// One line per match: kind, depth, and text.
pub fn summarize(matches: &[SearchMatch]) -> String {
    matches
        .iter()
        .map(|m| format!("{:?} depth={} {:?}\n", m.node.kind(), m.depth, m.node.text().to_string()))
        .collect()
}

pub fn ws(b: &mut TreeBuilder) {
    b.token(Whitespace, " ");
}

pub fn unqualified_id(b: &mut TreeBuilder, name: &str) {
    b.node(UnqualifiedId, |b| {
        b.token(SymbolIdentifier, name).empty();
    });
}

pub fn identifier_unpacked_dimensions(b: &mut TreeBuilder, name: &str) {
    b.node(IdentifierUnpackedDimensions, |b| {
        b.token(SymbolIdentifier, name).empty();
    });
}

/// `[msb:lsb]`
pub fn packed_range(b: &mut TreeBuilder, msb: &str, lsb: &str) {
    b.node(PackedDimensions, |b| {
        b.node(DimensionRange, |b| {
            b.token(BracketOpen, "[")
                .token(DecNumber, msb)
                .token(Colon, ":")
                .token(DecNumber, lsb)
                .token(BracketClose, "]");
        });
    });
}

/// `[size]`
pub fn unpacked_size(b: &mut TreeBuilder, size: &str) {
    b.node(UnpackedDimensions, |b| {
        b.node(DimensionRange, |b| {
            b.token(BracketOpen, "[")
                .token(DecNumber, size)
                .token(BracketClose, "]");
        });
    });
}

/// `<direction> <name>;` declared in a module body.
///
/// One name yields a single `IdentifierUnpackedDimensions` in the identifier slot;
/// several yield an `IdentifierList`, which is how a malformed tree can end up with
/// more than one identifier under a declaration.
pub fn module_port_declaration(direction: Option<(SyntaxKind, &str)>, names: &[&str]) -> SyntaxTree {
    build(|b| {
        b.node(ModulePortDeclaration, |b| {
            match direction {
                Some((kind, text)) => {
                    b.token(kind, text);
                    ws(b);
                }
                None => {
                    b.empty();
                }
            }
            b.empty().empty();
            if let [name] = names {
                identifier_unpacked_dimensions(b, name);
            } else {
                b.node(IdentifierList, |b| {
                    for (i, name) in names.iter().enumerate() {
                        if i > 0 {
                            b.token(Comma, ",");
                        }
                        identifier_unpacked_dimensions(b, name);
                    }
                });
            }
            b.token(Semicolon, ";");
        });
    })
}

/// `PortReference` holding a bare identifier leaf, or nothing at all.
pub fn port_reference(name: Option<&str>) -> SyntaxTree {
    build(|b| {
        b.node(PortReference, |b| {
            if let Some(name) = name {
                b.token(SymbolIdentifier, name);
            }
        });
    })
}

/// `ref logic [7:0] mem [4]` as a task/function formal.
pub fn full_port_item() -> SyntaxTree {
    build(|b| {
        b.node(PortItem, |b| {
            b.token(KwRef, "ref");
            ws(b);
            b.node(DataTypeImplicitBasicIdDimensions, |b| {
                b.node(DataType, |b| {
                    b.token(KwLogic, "logic");
                    packed_range(b, "7", "0");
                });
                ws(b);
                unqualified_id(b, "mem");
                unpacked_size(b, "4");
            });
            b.empty();
        });
    })
}

/// `.name(value)`, or `.name` when `value` is `None`.
pub fn actual_named_port(name: &str, value: Option<&str>) -> SyntaxTree {
    build(|b| {
        b.node(ActualNamedPort, |b| {
            b.token(Dot, ".").token(SymbolIdentifier, name);
            match value {
                Some(value) => {
                    b.node(ParenGroup, |b| {
                        b.token(ParenOpen, "(");
                        b.node(Expression, |b| {
                            b.node(Reference, |b| {
                                unqualified_id(b, value);
                            });
                        });
                        b.token(ParenClose, ")");
                    });
                }
                None => {
                    b.empty();
                }
            }
        });
    })
}

/// Two modules covering every port construct:
///
/// ```text
/// module counter(input wire clk, output logic [3:0] count, en);
///   task bump(input int step, ref logic [7:0] mem [4]); endtask
///   flop u_flop(.d(count), .q);
/// endmodule
/// module flop(d, q);
///   input d;
///   output reg q;
/// endmodule
/// ```
pub fn sample_design() -> SyntaxTree {
    build(|b| {
        b.node(DescriptionList, |b| {
            counter_module(b);
            b.token(Newline, "\n");
            flop_module(b);
        });
    })
}

fn counter_module(b: &mut TreeBuilder) {
    b.node(ModuleDeclaration, |b| {
        b.node(ModuleHeader, |b| {
            b.token(KwModule, "module");
            ws(b);
            unqualified_id(b, "counter");
            b.node(PortDeclarationList, |b| {
                b.token(ParenOpen, "(");
                b.node(PortDeclaration, |b| {
                    b.token(KwInput, "input");
                    ws(b);
                    b.token(KwWire, "wire");
                    ws(b);
                    b.empty();
                    unqualified_id(b, "clk");
                    b.empty();
                });
                b.token(Comma, ",");
                ws(b);
                b.node(PortDeclaration, |b| {
                    b.token(KwOutput, "output");
                    ws(b);
                    b.token(KwLogic, "logic");
                    ws(b);
                    b.node(DataType, |b| {
                        packed_range(b, "3", "0");
                    });
                    ws(b);
                    unqualified_id(b, "count");
                    b.empty();
                });
                b.token(Comma, ",");
                ws(b);
                b.node(PortDeclaration, |b| {
                    b.empty().empty().empty();
                    unqualified_id(b, "en");
                    b.empty();
                });
                b.token(ParenClose, ")");
            });
            b.token(Semicolon, ";");
        });
        b.token(Newline, "\n");
        b.node(ModuleItemList, |b| {
            b.node(TaskDeclaration, |b| {
                b.token(KwTask, "task");
                ws(b);
                unqualified_id(b, "bump");
                b.node(PortItemList, |b| {
                    b.token(ParenOpen, "(");
                    b.node(PortItem, |b| {
                        b.token(KwInput, "input");
                        ws(b);
                        b.node(DataTypeImplicitBasicIdDimensions, |b| {
                            b.node(DataType, |b| {
                                b.token(KwInt, "int");
                            });
                            ws(b);
                            b.token(SymbolIdentifier, "step");
                            b.empty();
                        });
                        b.empty();
                    });
                    b.token(Comma, ",");
                    ws(b);
                    b.node(PortItem, |b| {
                        b.token(KwRef, "ref");
                        ws(b);
                        b.node(DataTypeImplicitBasicIdDimensions, |b| {
                            b.node(DataType, |b| {
                                b.token(KwLogic, "logic");
                                ws(b);
                                packed_range(b, "7", "0");
                            });
                            ws(b);
                            unqualified_id(b, "mem");
                            ws(b);
                            unpacked_size(b, "4");
                        });
                        b.empty();
                    });
                    b.token(ParenClose, ")");
                });
                b.token(Semicolon, ";");
                ws(b);
                b.token(KwEndtask, "endtask");
            });
            b.token(Newline, "\n");
            b.node(InstantiationBase, |b| {
                b.node(DataType, |b| {
                    unqualified_id(b, "flop");
                });
                ws(b);
                b.node(GateInstance, |b| {
                    b.token(SymbolIdentifier, "u_flop");
                    b.node(PortActualList, |b| {
                        b.token(ParenOpen, "(");
                        b.node(ActualNamedPort, |b| {
                            b.token(Dot, ".").token(SymbolIdentifier, "d");
                            b.node(ParenGroup, |b| {
                                b.token(ParenOpen, "(");
                                b.node(Expression, |b| {
                                    b.node(Reference, |b| {
                                        unqualified_id(b, "count");
                                    });
                                });
                                b.token(ParenClose, ")");
                            });
                        });
                        b.token(Comma, ",");
                        ws(b);
                        b.node(ActualNamedPort, |b| {
                            b.token(Dot, ".").token(SymbolIdentifier, "q");
                            b.empty();
                        });
                        b.token(ParenClose, ")");
                    });
                });
                b.token(Semicolon, ";");
            });
        });
        b.token(Newline, "\n");
        b.token(KwEndmodule, "endmodule");
    });
}

fn flop_module(b: &mut TreeBuilder) {
    b.node(ModuleDeclaration, |b| {
        b.node(ModuleHeader, |b| {
            b.token(KwModule, "module");
            ws(b);
            unqualified_id(b, "flop");
            b.node(PortList, |b| {
                b.token(ParenOpen, "(");
                b.node(Port, |b| {
                    b.node(PortReference, |b| {
                        unqualified_id(b, "d");
                        b.empty();
                    });
                });
                b.token(Comma, ",");
                ws(b);
                b.node(Port, |b| {
                    b.node(PortReference, |b| {
                        b.token(SymbolIdentifier, "q").empty();
                    });
                });
                b.token(ParenClose, ")");
            });
            b.token(Semicolon, ";");
        });
        b.token(Newline, "\n");
        b.node(ModuleItemList, |b| {
            b.node(ModulePortDeclaration, |b| {
                b.token(KwInput, "input");
                ws(b);
                b.empty().empty();
                identifier_unpacked_dimensions(b, "d");
                b.token(Semicolon, ";");
            });
            b.token(Newline, "\n");
            b.node(ModulePortDeclaration, |b| {
                b.token(KwOutput, "output");
                ws(b);
                b.token(KwReg, "reg");
                ws(b);
                b.empty();
                identifier_unpacked_dimensions(b, "q");
                b.token(Semicolon, ";");
            });
        });
        b.token(Newline, "\n");
        b.token(KwEndmodule, "endmodule");
    });
}
