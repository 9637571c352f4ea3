/// 业务错误码
///
/// 前两位对应 HTTP 状态语义，后三位为业务序号，
/// ApiResponse 中以 i32 形式返回。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求错误
    BadRequest = 40000,
    UnknownParameter = 40001,
    InvalidRatingValue = 40002,
    InvalidGrade = 40003,
    MultifileUploadNotAllowed = 40004,
    CanNotDeleteCurrentUser = 40005,

    // 401xx 认证
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx 授权
    Forbidden = 40300,
    NotAssigned = 40301,

    // 404xx 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    VendorNotFound = 40402,
    AssignmentNotFound = 40403,
    GradeNotFound = 40404,
    FileNotFound = 40405,

    // 409xx 冲突
    UserAlreadyExists = 40900,
    UserNameAlreadyExists = 40901,
    UserEmailAlreadyExists = 40902,
    AssignmentAlreadyExists = 40903,
    VendorAlreadySubmitted = 40904,

    // 413xx / 415xx 上传限制
    FileSizeExceeded = 41300,
    FileTypeNotAllowed = 41500,

    // 422xx 字段校验
    UserNameInvalid = 42201,
    UserEmailInvalid = 42202,
    UserPasswordInvalid = 42203,
    VendorFormLocked = 42204,

    // 429xx 限流
    RateLimitExceeded = 42900,

    // 500xx 服务端错误
    InternalServerError = 50000,
    RegisterFailed = 50001,
    UserCreationFailed = 50002,
    UserUpdateFailed = 50003,
    UserDeleteFailed = 50004,
    FileUploadFailed = 50005,
}
