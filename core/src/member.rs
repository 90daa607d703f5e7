//! Names of the generated members, and the rewrite of positional ones.
//!
//! A union exposes every alternative through positional members (`IsT0`,
//! `AsT0`, `MapT0`, `TryPickT0`) and through named ones built from the
//! alternative's readable name (`IsListOfInt`). The rewrite maps the former
//! to the latter.

use core::fmt;

use hashbrown::HashMap;
use unionname_types::TypeDescriptor;

use crate::union::Alternatives;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Is,
    As,
    Map,
    TryPick,
}

impl MemberKind {
    pub const ALL: [MemberKind; 4] = [
        MemberKind::Is,
        MemberKind::As,
        MemberKind::Map,
        MemberKind::TryPick,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            MemberKind::Is => "Is",
            MemberKind::As => "As",
            MemberKind::Map => "Map",
            MemberKind::TryPick => "TryPick",
        }
    }

    /// Positional `Is`/`As` members are properties; the named ones are
    /// methods, so a rewrite has to add the call.
    pub fn is_property(self) -> bool {
        matches!(self, MemberKind::Is | MemberKind::As)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// `<prefix><ReadableName>`, e.g. `IsDictionaryOfString_Int`.
pub fn member_name(kind: MemberKind, ty: &TypeDescriptor) -> String {
    format!("{}{}", kind.prefix(), ty.readable_name())
}

/// One generated named member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    /// Position of the alternative it belongs to.
    pub index: usize,
    pub name: String,
    /// Declaration of the alternative, as the member's signature spells it.
    pub declaration: String,
}

/// Two alternatives whose named members would have the same names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCollision {
    /// The readable name both alternatives render to.
    pub name: String,
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Members {
    /// Every member of every alternative, grouped by alternative.
    pub members: Vec<Member>,
    pub collisions: Vec<MemberCollision>,
}

impl Alternatives {
    /// All named members, and any alternatives whose names clash.
    pub fn members(&self) -> Members {
        let mut result = Members::default();
        let mut first_by_name: HashMap<String, usize> = HashMap::new();

        for (index, alternative) in self.iter().enumerate() {
            let readable = alternative.readable_name();
            if let Some(&first) = first_by_name.get(&readable) {
                result.collisions.push(MemberCollision {
                    name: readable.clone(),
                    first,
                    second: index,
                });
            } else {
                first_by_name.insert(readable.clone(), index);
            }

            let declaration = alternative.fully_qualified_name();
            for kind in MemberKind::ALL {
                result.members.push(Member {
                    kind,
                    index,
                    name: format!("{}{}", kind.prefix(), readable),
                    declaration: declaration.clone(),
                });
            }
        }
        result
    }

    /// The named replacement of a positional member, or `None` when the
    /// position is past the last alternative.
    pub fn rewrite(&self, positional: &PositionalMember) -> Option<Rewrite> {
        let Some(alternative) = self.get(positional.index) else {
            tracing::debug!(
                member = %positional,
                alternatives = self.len(),
                "positional member is out of range"
            );
            return None;
        };
        Some(Rewrite {
            name: member_name(positional.kind, alternative),
            invoke: positional.kind.is_property(),
        })
    }
}

/// A positional member access such as `IsT0` or `TryPickT3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionalMember {
    pub kind: MemberKind,
    pub index: usize,
}

impl PositionalMember {
    /// Recognize `<prefix>T<n>`. Only plain decimal digits are accepted
    /// after the `T`.
    pub fn parse(name: &str) -> Option<Self> {
        MemberKind::ALL.into_iter().find_map(|kind| {
            let digits = name.strip_prefix(kind.prefix())?.strip_prefix('T')?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let index = digits.parse().ok()?;
            Some(PositionalMember { kind, index })
        })
    }
}

impl fmt::Display for PositionalMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.kind.prefix(), self.index)
    }
}

/// Replacement text for a positional member access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub name: String,
    /// The replacement is a method where the original was a property.
    pub invoke: bool,
}

impl fmt::Display for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.invoke {
            f.write_str("()")?;
        }
        Ok(())
    }
}
