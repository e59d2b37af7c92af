use chrono::{DateTime, SubsecRound, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Declares a fieldless enum persisted as TEXT and serialized by variant name.
macro_rules! text_enum {
    ($(#[$meta:meta])* pub enum $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::database::models::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    _ => Err($crate::database::models::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <str as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let text = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                Ok(text.parse::<$name>()?)
            }
        }

        impl<'q> sqlx::Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as sqlx::Encode<sqlx::Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

pub mod account;
pub mod fish_species;
pub mod fishing_report;
pub mod landing;
pub mod location;
pub mod tackle;
pub mod user;

pub use account::Account;
pub use fish_species::FishSpecies;
pub use fishing_report::{FishingReport, WeatherConditions};
pub use landing::Landing;
pub use location::Location;
pub use tackle::{Tackle, TackleType};
pub use user::{Language, NotificationMethod, User, UserRole, UserStatus};

#[derive(Debug, Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Server clock, truncated to the microsecond precision Postgres stores.
pub fn utc_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Entities scoped to a single account.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

/// Entities removed by stamping a deletion time instead of dropping the row.
pub trait SoftDeletable {
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn mark_deleted(&mut self, at: DateTime<Utc>);

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Entities carrying server-assigned creation and modification times.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;

    fn stamp_created(&mut self, at: DateTime<Utc>);

    fn stamp_updated(&mut self, at: DateTime<Utc>);
}

/// Implements `Owned`, `SoftDeletable` and `Timestamped` from field names.
macro_rules! tenant_entity {
    ($name:ident, owner = $owner:ident, created = $created:ident, updated = $updated:ident, deleted = $deleted:ident) => {
        impl $crate::database::models::Owned for $name {
            fn owner_id(&self) -> uuid::Uuid {
                self.$owner
            }
        }

        impl $crate::database::models::SoftDeletable for $name {
            fn deleted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.$deleted
            }

            fn mark_deleted(&mut self, at: chrono::DateTime<chrono::Utc>) {
                self.$deleted = Some(at);
            }
        }

        impl $crate::database::models::Timestamped for $name {
            fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.$created
            }

            fn stamp_created(&mut self, at: chrono::DateTime<chrono::Utc>) {
                self.$created = at;
                self.$updated = at;
            }

            fn stamp_updated(&mut self, at: chrono::DateTime<chrono::Utc>) {
                self.$updated = at;
            }
        }
    };
}

pub(crate) use tenant_entity;
pub(crate) use text_enum;
