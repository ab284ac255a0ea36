// join `path` onto the working directory `wd` and normalize the result
//
// an absolute `path` replaces `wd`. "." is dropped, ".." removes the previous
// segment and stops at root. the result always starts with '/' and never ends
// with one unless it is root itself.
pub fn join_path(wd: &str, path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    if !path.starts_with('/') {
        push_segments(&mut segments, wd);
    }
    push_segments(&mut segments, path);

    // regroup
    if segments.is_empty() {
        String::from("/")
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn push_segments<'a>(segments: &mut Vec<&'a str>, path: &'a str) {
    for seg in path.split('/') {
        match seg {
            "" | "." => (),
            ".." => {
                // popping an empty stack keeps us at root
                segments.pop();
            }
            s => segments.push(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::join_path;

    #[test]
    fn relative_segments_append_to_wd() {
        assert_eq!(join_path("/", "a"), "/a");
        assert_eq!(join_path("/a", "b"), "/a/b");
        assert_eq!(join_path("/a", "b/c/"), "/a/b/c");
    }

    #[test]
    fn absolute_path_replaces_wd() {
        assert_eq!(join_path("/a/b", "/etc"), "/etc");
        assert_eq!(join_path("/a/b", "/"), "/");
    }

    #[test]
    fn dots_collapse() {
        assert_eq!(join_path("/a", ".."), "/");
        assert_eq!(join_path("/a/b", "../c"), "/a/c");
        assert_eq!(join_path("/a", "./b/./c/.."), "/a/b");
        assert_eq!(join_path("/a", "."), "/a");
    }

    #[test]
    fn dotdot_above_root_clamps() {
        assert_eq!(join_path("/", ".."), "/");
        assert_eq!(join_path("/a", "../../../b"), "/b");
        assert_eq!(join_path("/", "/../.."), "/");
    }

    #[test]
    fn repeated_slashes_are_dropped() {
        assert_eq!(join_path("/a", "b//c///"), "/a/b/c");
        assert_eq!(join_path("/", "//x"), "/x");
    }

    #[test]
    fn result_is_always_normalized() {
        let bases = ["/", "/a", "/a/b/c"];
        let args = ["x", "..", ".", "../..", "x/../y", "/z/./", "x//y/", "../../../.."];
        for base in bases {
            for arg in args {
                let p = join_path(base, arg);
                assert!(p.starts_with('/'), "{p}");
                assert!(p == "/" || !p.ends_with('/'), "{p}");
                assert!(!p.contains("//"), "{p}");
                assert!(p.split('/').all(|s| s != "." && s != ".."), "{p}");
            }
        }
    }
}
