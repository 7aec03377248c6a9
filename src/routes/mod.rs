pub mod assignments;

pub mod attendance;

pub mod auth;

pub mod classes;

pub mod dashboard;

pub mod events;

pub mod frontend;

pub mod grades;

pub mod students;

pub mod subjects;

pub mod teachers;

pub mod timetable;

pub mod users;

pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use dashboard::configure_dashboard_routes;
pub use events::configure_event_routes;
pub use frontend::configure_frontend_routes;
pub use grades::configure_grade_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use teachers::configure_teacher_routes;
pub use timetable::configure_timetable_routes;
pub use users::configure_user_routes;
