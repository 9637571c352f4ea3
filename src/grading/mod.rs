//! 评分核心模块
//!
//! 供应商评级的纯计算层：参数目录、分部得分、综合评级与表单完成度。
//! 本模块不做任何 I/O，所有函数对相同输入产生相同输出，
//! 由 services/storage 层在评分提交与表单保存时调用。

pub mod catalog;
pub mod completion;
pub mod score;

pub use catalog::{GradingParameter, Section};
pub use completion::{VendorFormSnapshot, compute_completion};
pub use score::{
    GradeComputation, GradeLetter, RatingBatchError, compute_grade, compute_section_score,
    is_section_complete, validate_rating_batch,
};
