//! Diesel table definitions for the catalogue schema.
//!
//! Must match `backend/migrations`.

diesel::table! {
    /// One row per model, trim level and door configuration.
    models (model_pk) {
        model_pk -> Int4,
        /// Catalogue model identifier, e.g. `WRANGLER`.
        #[max_length = 40]
        model_id -> Varchar,
        #[max_length = 30]
        trim_level -> Varchar,
        num_doors -> Int4,
        /// Wheel diameter in inches.
        wheel_size -> Int4,
        base_price -> Numeric,
    }
}
