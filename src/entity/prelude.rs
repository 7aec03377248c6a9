pub use super::assignments::Entity as Assignments;
pub use super::attendance_records::Entity as AttendanceRecords;
pub use super::attendance_sessions::Entity as AttendanceSessions;
pub use super::classes::Entity as Classes;
pub use super::events::Entity as Events;
pub use super::grades::Entity as Grades;
pub use super::students::Entity as Students;
pub use super::subjects::Entity as Subjects;
pub use super::submissions::Entity as Submissions;
pub use super::teachers::Entity as Teachers;
pub use super::timetable_entries::Entity as TimetableEntries;
pub use super::users::Entity as Users;
