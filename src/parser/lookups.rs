use std::collections::HashMap;

use crate::lexer::tokens::TokenKind;

use super::{parser::Parser, stmt::*};

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser<'_>);

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Relational
    parser.binding_power(TokenKind::Less, BindingPower::Relational);
    parser.binding_power(TokenKind::LessEquals, BindingPower::Relational);
    parser.binding_power(TokenKind::Greater, BindingPower::Relational);
    parser.binding_power(TokenKind::GreaterEquals, BindingPower::Relational);
    parser.binding_power(TokenKind::Equals, BindingPower::Relational);
    parser.binding_power(TokenKind::NotEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.binding_power(TokenKind::Plus, BindingPower::Additive);
    parser.binding_power(TokenKind::Dash, BindingPower::Additive);
    parser.binding_power(TokenKind::Star, BindingPower::Multiplicative);
    parser.binding_power(TokenKind::Slash, BindingPower::Multiplicative);

    // Statements
    parser.stmt(TokenKind::Int, parse_var_decl_stmt);
    parser.stmt(TokenKind::Char, parse_var_decl_stmt);
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
