//! Line-oriented declaration scripts.
//!
//! One declaration per line, parents before children:
//!
//! ```text
//! // core atom types
//! @module core
//! ATOM
//! NODE <- ATOM
//! LINK <- ATOM
//! NUMBER_NODE <- NODE "NumberNode"
//! LEGACY_LINK <- "Old_Link", LINK
//! ```
//!
//! - `SYMBOL [<- PARENT, ...] ["Name"]` declares a type. The type name is
//!   derived from the symbol with [`symbol_to_type_name`] unless an explicit
//!   quoted name is given.
//! - A bare parent symbol declared earlier in the same script resolves to
//!   that declaration's name (explicit or derived); any other symbol goes
//!   through the same conversion. A quoted parent is taken literally.
//! - `@module NAME` overrides the module name, `@depends A, B` adds
//!   dependencies.
//! - `//` at the start of a line or after whitespace starts a comment.
//!   Symbols are made of [`is_name_char`] characters.

use std::collections::HashMap;
use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::utils::{is_name_char, symbol_to_type_name, type_name_to_symbol};
use crate::{DeclarationError, ModuleDeclarations, TypeDeclaration};

impl ModuleDeclarations {
    /// Parse a declaration script.
    ///
    /// `default_module` names the batch unless the script has an
    /// `@module` directive.
    pub fn from_script(default_module: &str, src: &str) -> Result<Self, DeclarationError> {
        let mut batch = Self::new(default_module);
        // symbol -> type name, for parents declared earlier in this script
        let mut symbols: IndexMap<&str, String> = IndexMap::new();

        for (idx, raw) in src.lines().enumerate() {
            let line = idx + 1;
            let Some(entry) = parse_line(line, raw)? else {
                continue;
            };

            match entry {
                Entry::Module(name) => batch.module = name.to_owned(),
                Entry::Depends(modules) => {
                    batch.depends.extend(modules.into_iter().map(str::to_owned))
                }
                Entry::Type {
                    symbol,
                    parents,
                    explicit,
                } => {
                    let name = explicit.map_or_else(|| symbol_to_type_name(symbol), str::to_owned);
                    let parents = parents
                        .into_iter()
                        .map(|parent| match parent {
                            Parent::Name(name) => name.to_owned(),
                            Parent::Symbol(p) => symbols
                                .get(p)
                                .cloned()
                                .unwrap_or_else(|| symbol_to_type_name(p)),
                        })
                        .collect();
                    symbols.insert(symbol, name.clone());
                    batch.push(TypeDeclaration { name, parents });
                }
            }
        }

        Ok(batch)
    }

    /// Render the batch as a script that parses back to the same batch.
    ///
    /// Names that do not survive the symbol round-trip are written quoted,
    /// both where they are declared and where they appear as parents.
    pub fn to_script(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "@module {}", self.module);
        if !self.depends.is_empty() {
            let _ = writeln!(out, "@depends {}", self.depends.join(", "));
        }

        // Mirrors the symbol table `from_script` builds.
        let mut symbols: HashMap<String, &str> = HashMap::new();
        for decl in &self.types {
            let symbol = type_name_to_symbol(&decl.name);
            out.push_str(&symbol);
            if !decl.parents.is_empty() {
                let parents: Vec<String> = decl
                    .parents
                    .iter()
                    .map(|parent| {
                        let bare = type_name_to_symbol(parent);
                        let resolved = symbols
                            .get(&bare)
                            .map_or_else(|| symbol_to_type_name(&bare), |&name| name.to_owned());
                        if resolved == *parent {
                            bare
                        } else {
                            format!("\"{}\"", parent)
                        }
                    })
                    .collect();
                let _ = write!(out, " <- {}", parents.join(", "));
            }
            if symbol_to_type_name(&symbol) != decl.name {
                let _ = write!(out, " \"{}\"", decl.name);
            }
            out.push('\n');
            symbols.insert(symbol, &decl.name);
        }

        out
    }
}

enum Entry<'a> {
    Module(&'a str),
    Depends(Vec<&'a str>),
    Type {
        symbol: &'a str,
        parents: Vec<Parent<'a>>,
        explicit: Option<&'a str>,
    },
}

enum Parent<'a> {
    Symbol(&'a str),
    Name(&'a str),
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Entry<'_>>, DeclarationError> {
    let text = raw.trim();
    if let Some(directive) = text.strip_prefix('@') {
        let directive = directive.split_once("//").map_or(directive, |(head, _)| head);
        return parse_directive(line, directive.trim()).map(Some);
    }

    let mut lexer = Lexer::new(line, text);
    let symbol = match lexer.next_token()? {
        None => return Ok(None),
        Some((Token::Word(symbol), _)) => symbol,
        Some(_) => return Err(DeclarationError::MissingSymbol { line }),
    };

    let mut parents = Vec::new();
    let mut explicit = None;
    match lexer.next_token()? {
        None => {}
        Some((Token::Quoted(name), _)) => explicit = Some(name),
        Some((Token::Arrow, _)) => loop {
            let parent = match lexer.next_token()? {
                Some((Token::Word(symbol), _)) => Parent::Symbol(symbol),
                Some((Token::Quoted(name), _)) => Parent::Name(name),
                None | Some((Token::Comma, _)) => {
                    return Err(DeclarationError::EmptyName { line });
                }
                Some((Token::Arrow, text)) => return Err(unexpected(line, text)),
            };
            parents.push(parent);

            match lexer.next_token()? {
                Some((Token::Comma, _)) => continue,
                None => break,
                Some((Token::Quoted(name), _)) => {
                    explicit = Some(name);
                    break;
                }
                Some((_, text)) => return Err(unexpected(line, text)),
            }
        },
        Some((_, text)) => return Err(unexpected(line, text)),
    }

    if let Some((_, text)) = lexer.next_token()? {
        return Err(unexpected(line, text));
    }

    Ok(Some(Entry::Type {
        symbol,
        parents,
        explicit,
    }))
}

fn parse_directive(line: usize, directive: &str) -> Result<Entry<'_>, DeclarationError> {
    let (keyword, rest) = directive
        .split_once(char::is_whitespace)
        .map_or((directive, ""), |(k, r)| (k, r.trim()));

    match keyword {
        "module" => {
            if rest.is_empty() {
                return Err(DeclarationError::EmptyName { line });
            }
            single_token(line, rest).map(Entry::Module)
        }
        "depends" => parse_list(line, rest).map(Entry::Depends),
        _ => Err(DeclarationError::UnknownDirective {
            line,
            directive: keyword.to_owned(),
        }),
    }
}

fn parse_list(line: usize, list: &str) -> Result<Vec<&str>, DeclarationError> {
    list.split(',')
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return Err(DeclarationError::EmptyName { line });
            }
            single_token(line, item)
        })
        .collect()
}

fn single_token(line: usize, text: &str) -> Result<&str, DeclarationError> {
    match text.split_once(char::is_whitespace) {
        Some((_, rest)) => Err(unexpected(line, rest.trim())),
        None => Ok(text),
    }
}

fn unexpected(line: usize, text: &str) -> DeclarationError {
    DeclarationError::TrailingInput {
        line,
        text: text.to_owned(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Quoted(&'a str),
    Arrow,
    Comma,
}

/// Splits a declaration line into tokens. Each token comes with its source
/// text for error messages.
struct Lexer<'a> {
    line: usize,
    text: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Self { line, text, pos: 0 }
    }

    fn next_token(&mut self) -> Result<Option<(Token<'a>, &'a str)>, DeclarationError> {
        let before = self.pos;
        let rest = &self.text[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
        let rest = trimmed;

        let after_space = self.pos == 0 || self.pos > before;
        if rest.is_empty() || (rest.starts_with("//") && after_space) {
            self.pos = self.text.len();
            return Ok(None);
        }

        let start = self.pos;
        let token = if rest.starts_with(',') {
            self.pos += 1;
            Token::Comma
        } else if rest.starts_with("<-") {
            self.pos += 2;
            Token::Arrow
        } else if let Some(quoted) = rest.strip_prefix('"') {
            let Some(close) = quoted.find('"') else {
                return Err(DeclarationError::UnterminatedName { line: self.line });
            };
            if close == 0 {
                return Err(DeclarationError::EmptyName { line: self.line });
            }
            self.pos += close + 2;
            Token::Quoted(&quoted[..close])
        } else {
            let len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
            if len == 0 {
                let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                return Err(unexpected(self.line, &rest[..len]));
            }
            self.pos += len;
            Token::Word(&rest[..len])
        };

        Ok(Some((token, &self.text[start..self.pos])))
    }
}
