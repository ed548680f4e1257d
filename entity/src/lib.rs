pub mod equipment_request;
pub mod footage_upload;
pub mod show;
pub mod submission;
pub mod user;
pub mod user_profile;

/*
 Users are mirrored from the auth provider on first sync, keyed by stack_id.
 Everything a student creates hangs off user.id and is removed with the user.
 Status columns are stored as plain strings, the server owns the allowed values.
 Shows only point at their host; losing the host leaves the show unassigned.
 */
