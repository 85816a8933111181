//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Identifier of the user who created the task.
        creator_id -> Int8,
        /// Identifier of the executor, if assigned.
        assigned_user_id -> Nullable<Int8>,
        /// Workflow status (`CREATED`, `IN_PROGRESS`, `DONE`).
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        create_date_time -> Timestamptz,
        /// Optional deadline.
        deadline_date -> Nullable<Date>,
        /// Latest completion timestamp.
        done_date_time -> Nullable<Timestamptz>,
        /// Priority (`LOW`, `MEDIUM`, `HIGH`).
        #[max_length = 20]
        priority -> Varchar,
    }
}
