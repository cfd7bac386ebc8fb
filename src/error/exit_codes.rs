use crate::error::CommonsError;
use std::io::ErrorKind;

pub fn get_exit_code(error: &CommonsError) -> i32 {
    match error {
        CommonsError::EmptySize
        | CommonsError::InvalidSizeFormat(_)
        | CommonsError::InvalidSizeUnit(_)
        | CommonsError::InvalidNumber(_)
        | CommonsError::NegativeWantedSize
        | CommonsError::NegativeTolerance
        | CommonsError::UnknownFileType(_)
        | CommonsError::UnknownOperator(_)
        | CommonsError::ValidationError(_) => 2,

        CommonsError::EmptyField(_) | CommonsError::EmptyStruct(_) | CommonsError::NotAStruct => 3,

        CommonsError::Io(e) if e.kind() == ErrorKind::PermissionDenied => 13,

        CommonsError::Io(e) if e.kind() == ErrorKind::NotFound => 4,

        _ => 1,
    }
}
