//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Application users.
    ///
    /// `name` carries the unique index `users_name_key`.
    users (id) {
        /// Primary key assigned by `BIGSERIAL`.
        id -> Int8,
        /// Login name.
        name -> Text,
        /// Non-negative age (`CHECK (age >= 0)`).
        age -> Int4,
        /// bcrypt digest; `NULL` for users created without a password.
        hashed_password -> Nullable<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Todo items. `user_id` has no foreign key.
    todos (id) {
        id -> Int8,
        title -> Text,
        body -> Text,
        done -> Bool,
        user_id -> Int8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, todos);
