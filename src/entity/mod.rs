//! SeaORM 数据库实体

pub mod assignments;
pub mod attendance_records;
pub mod attendance_sessions;
pub mod classes;
pub mod events;
pub mod grades;
pub mod prelude;
pub mod students;
pub mod subjects;
pub mod submissions;
pub mod teachers;
pub mod timetable_entries;
pub mod users;
