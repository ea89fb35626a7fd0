//! Credential hashing adapters.

mod bcrypt_hasher;

pub use bcrypt_hasher::{
    BcryptPasswordHasher, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MAX_PASSWORD_BYTES, MIN_BCRYPT_COST,
};
