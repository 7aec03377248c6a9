/// 业务错误码
///
/// 与 HTTP 状态码分离：前 3 位对应 HTTP 状态，后 2 位为业务细分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 400xx
    BadRequest = 40000,

    // 401xx
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx
    Forbidden = 40300,
    ClassPermissionDenied = 40301,
    AssignmentPermissionDenied = 40302,

    // 404xx
    NotFound = 40400,
    UserNotFound = 40401,
    TeacherNotFound = 40402,
    StudentNotFound = 40403,
    ClassNotFound = 40404,
    SubjectNotFound = 40405,
    AssignmentNotFound = 40406,
    SubmissionNotFound = 40407,
    GradeNotFound = 40408,
    AttendanceSessionNotFound = 40409,
    EventNotFound = 40410,
    TimetableEntryNotFound = 40411,

    // 409xx
    UserAlreadyExists = 40900,
    ClassAlreadyExists = 40901,
    SubjectAlreadyExists = 40902,
    ClassReassignConflict = 40903,
    SubmissionAlreadyExists = 40904,

    // 422xx
    UserNameInvalid = 42200,
    UserEmailInvalid = 42201,
    UserPasswordInvalid = 42202,
    SubjectCodeInvalid = 42203,

    // 500xx
    InternalServerError = 50000,
}
