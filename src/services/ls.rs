use super::{ServiceError, ServiceResult};
use crate::session::Session;

const USAGE: &str = "ls does not take arguments";

/// One entry of the working directory per line, in server order.
pub fn ls(session: &mut Session, args: &[&str]) -> ServiceResult<String> {
    if !args.is_empty() {
        return Err(ServiceError::ArgumentCount(USAGE));
    }

    let entries = session.client().list_directory(session.wd())?;

    let mut return_str = String::new();
    for entry in entries {
        return_str += &entry;
        return_str.push('\n');
    }
    Ok(return_str)
}
