//! Alias-aware conversion between enum variants and their textual tokens.
//!
//! TJA enum values accept several spellings: `COURSE:Oni` and `COURSE:3` name
//! the same difficulty. Each enum declares a static table of one canonical
//! token plus zero or more aliases per variant, and this module memoizes a
//! lookup table per type in a process-wide registry. Lookups are exact and
//! case-sensitive, no normalization is applied.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex},
};

use thiserror::Error;

/// The token declaration of one enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSpec {
    /// The canonical serialized token.
    pub canonical: &'static str,
    /// Alternate tokens accepted by [`resolve`].
    pub aliases: &'static [&'static str],
}

/// An enum whose variants carry textual token declarations.
pub trait Aliased: Copy + PartialEq + std::fmt::Debug + Any {
    /// All variants of the type, in declaration order.
    fn variants() -> &'static [Self];

    /// The token declaration of `self`, or `None` when the variant lacks one.
    ///
    /// A missing declaration on any variant is a defect in the static table:
    /// it aborts registration of the entire type (see
    /// [`AliasError::MissingAliasSpec`]).
    fn alias_spec(self) -> Option<AliasSpec>;
}

/// An error occurred on alias resolution or registration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum AliasError {
    /// The token matches no canonical token or alias of the type.
    #[error(
        "attempted to convert token `{token}` to enum `{type_name}`, but it has no variant with that alias"
    )]
    UnknownToken {
        /// The enum type that was targeted.
        type_name: &'static str,
        /// The token that failed to resolve.
        token: String,
    },
    /// The variant is not one of the type's declared variants.
    #[error("variant `{variant}` is out of range for enum `{type_name}`")]
    UndefinedVariant {
        /// The enum type that was targeted.
        type_name: &'static str,
        /// The variant that failed to serialize.
        variant: String,
    },
    /// A variant of the type has no token declaration. This is a defect in
    /// the static alias table, not bad input.
    #[error(
        "attempted to register enum `{type_name}`, but variant `{variant}` is missing an alias declaration"
    )]
    MissingAliasSpec {
        /// The enum type whose registration was aborted.
        type_name: &'static str,
        /// The variant lacking a declaration.
        variant: String,
    },
}

/// Memoized lookup tables of one enum type. Variants are referred to by their
/// index in [`Aliased::variants`] so the registry can stay type-erased.
#[derive(Debug)]
struct TypeAliases {
    by_token: HashMap<&'static str, usize>,
    canonical: Vec<&'static str>,
}

/// Process-wide cache, one entry per registered enum type. The mutex makes
/// concurrent first use from multiple decodes sound.
static REGISTRY: LazyLock<Mutex<HashMap<TypeId, Arc<TypeAliases>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Returns the cached tables of `T`, populating them on first use.
///
/// Population is fail-fast: a variant without a declaration aborts before
/// anything is cached, so a retry fails the same way for every variant.
fn tables_of<T: Aliased>() -> Result<Arc<TypeAliases>, AliasError> {
    let mut registry = REGISTRY.lock().expect("alias registry lock poisoned");
    if let Some(tables) = registry.get(&TypeId::of::<T>()) {
        return Ok(Arc::clone(tables));
    }

    let variants = T::variants();
    let mut by_token = HashMap::new();
    let mut canonical = Vec::with_capacity(variants.len());
    for (index, &variant) in variants.iter().enumerate() {
        let Some(spec) = variant.alias_spec() else {
            return Err(AliasError::MissingAliasSpec {
                type_name: short_type_name::<T>(),
                variant: format!("{variant:?}"),
            });
        };
        by_token.insert(spec.canonical, index);
        for &alias in spec.aliases {
            by_token.insert(alias, index);
        }
        canonical.push(spec.canonical);
    }

    let tables = Arc::new(TypeAliases { by_token, canonical });
    registry.insert(TypeId::of::<T>(), Arc::clone(&tables));
    Ok(tables)
}

/// Resolves a textual token into the variant declaring it.
///
/// The lookup covers the canonical token and all aliases of every variant,
/// case-sensitively.
///
/// # Errors
///
/// Returns [`AliasError::UnknownToken`] when no variant declares `token`, or
/// [`AliasError::MissingAliasSpec`] when the type's table is ill-formed.
pub fn resolve<T: Aliased>(token: &str) -> Result<T, AliasError> {
    let tables = tables_of::<T>()?;
    let &index = tables
        .by_token
        .get(token)
        .ok_or_else(|| AliasError::UnknownToken {
            type_name: short_type_name::<T>(),
            token: token.to_owned(),
        })?;
    Ok(*T::variants().get(index).expect("alias index in range"))
}

/// Returns the canonical serialized token of a variant.
///
/// This is always the canonical token, not necessarily the alias that was
/// used to resolve the variant.
///
/// # Errors
///
/// Returns [`AliasError::UndefinedVariant`] when `variant` is not in the
/// type's declared variant list, or [`AliasError::MissingAliasSpec`] when the
/// type's table is ill-formed.
pub fn unresolve<T: Aliased>(variant: T) -> Result<&'static str, AliasError> {
    let position = T::variants()
        .iter()
        .position(|&v| v == variant)
        .ok_or_else(|| AliasError::UndefinedVariant {
            type_name: short_type_name::<T>(),
            variant: format!("{variant:?}"),
        })?;
    let tables = tables_of::<T>()?;
    Ok(tables
        .canonical
        .get(position)
        .copied()
        .expect("canonical table index in range"))
}

#[cfg(test)]
mod tests {
    use super::{AliasError, AliasSpec, Aliased, resolve, unresolve};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestEnum {
        Foo,
        Bar,
        FooBar,
    }

    impl Aliased for TestEnum {
        fn variants() -> &'static [Self] {
            &[Self::Foo, Self::Bar, Self::FooBar]
        }

        fn alias_spec(self) -> Option<AliasSpec> {
            Some(match self {
                Self::Foo => AliasSpec {
                    canonical: "Foo",
                    aliases: &["owo", "1", "23"],
                },
                Self::Bar => AliasSpec {
                    canonical: "Bar",
                    aliases: &["4"],
                },
                Self::FooBar => AliasSpec {
                    canonical: "5",
                    aliases: &[],
                },
            })
        }
    }

    #[test]
    fn resolves_canonical_tokens_and_aliases() {
        assert_eq!(resolve::<TestEnum>("Foo"), Ok(TestEnum::Foo));
        assert_eq!(resolve::<TestEnum>("owo"), Ok(TestEnum::Foo));
        assert_eq!(resolve::<TestEnum>("1"), Ok(TestEnum::Foo));
        assert_eq!(resolve::<TestEnum>("23"), Ok(TestEnum::Foo));
        assert_eq!(resolve::<TestEnum>("Bar"), Ok(TestEnum::Bar));
        assert_eq!(resolve::<TestEnum>("4"), Ok(TestEnum::Bar));
        assert_eq!(resolve::<TestEnum>("5"), Ok(TestEnum::FooBar));
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["Beans", "-1", "0", "2", "3", "6", "foo"] {
            assert_eq!(
                resolve::<TestEnum>(token),
                Err(AliasError::UnknownToken {
                    type_name: "TestEnum",
                    token: token.to_owned(),
                })
            );
        }
    }

    #[test]
    fn unresolves_to_the_canonical_token_only() {
        assert_eq!(unresolve(TestEnum::Foo), Ok("Foo"));
        assert_eq!(unresolve(TestEnum::Bar), Ok("Bar"));
        assert_eq!(unresolve(TestEnum::FooBar), Ok("5"));
    }

    /// A variant list that deliberately omits one variant, standing in for a
    /// value outside the type's defined set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PartialEnum {
        Listed,
        Unlisted,
    }

    impl Aliased for PartialEnum {
        fn variants() -> &'static [Self] {
            &[Self::Listed]
        }

        fn alias_spec(self) -> Option<AliasSpec> {
            Some(AliasSpec {
                canonical: "Listed",
                aliases: &[],
            })
        }
    }

    #[test]
    fn unresolve_rejects_undefined_variants() {
        assert_eq!(
            unresolve(PartialEnum::Unlisted),
            Err(AliasError::UndefinedVariant {
                type_name: "PartialEnum",
                variant: "Unlisted".to_owned(),
            })
        );
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BadTestEnum {
        Foo,
        Bar,
        FooBar,
    }

    impl Aliased for BadTestEnum {
        fn variants() -> &'static [Self] {
            &[Self::Foo, Self::Bar, Self::FooBar]
        }

        fn alias_spec(self) -> Option<AliasSpec> {
            match self {
                Self::Foo => Some(AliasSpec {
                    canonical: "Foo",
                    aliases: &[],
                }),
                Self::Bar | Self::FooBar => None,
            }
        }
    }

    #[test]
    fn missing_declaration_fails_the_whole_type() {
        let expected = AliasError::MissingAliasSpec {
            type_name: "BadTestEnum",
            variant: "Bar".to_owned(),
        };
        // Even the variant that does declare a token fails to resolve.
        assert_eq!(resolve::<BadTestEnum>("Foo"), Err(expected.clone()));
        assert_eq!(unresolve(BadTestEnum::Foo), Err(expected.clone()));
        // A retry fails identically, nothing was left in the cache.
        assert_eq!(resolve::<BadTestEnum>("Foo"), Err(expected));
    }
}
