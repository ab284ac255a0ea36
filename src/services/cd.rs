use super::{ServiceError, ServiceResult};
use crate::session::Session;

const USAGE: &str = "cd requires exactly one argument";

pub fn cd(session: &mut Session, args: &[&str]) -> ServiceResult<String> {
    let [path] = args else {
        return Err(ServiceError::ArgumentCount(USAGE));
    };

    let dir_path = session.resolve(path);
    let info = session.client().file_info(&dir_path)?;

    if !info.is_dir {
        return Err(ServiceError::NotADirectory);
    }
    session.commit(dir_path);
    Ok(String::new())
}
