use std::ffi::{OsStr, OsString};

/// One external tool call: program, argument list and optional stdin payload.
///
/// Arguments are passed to the process verbatim; nothing here is ever interpreted by a shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<OsString>,
    stdin: Option<Vec<u8>>,
}

impl ToolInvocation {
    /// Start an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Feed `bytes` to the process on stdin.
    pub fn stdin(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(bytes.into());
        self
    }

    /// Program name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument list, excluding the program.
    pub fn arg_list(&self) -> &[OsString] {
        &self.args
    }

    /// Stdin payload, if any.
    pub fn stdin_bytes(&self) -> Option<&[u8]> {
        self.stdin.as_deref()
    }

    /// The argument following the first occurrence of `flag`, e.g. the path after `-o`.
    pub fn value_after(&self, flag: &str) -> Option<&OsStr> {
        let pos = self.args.iter().position(|a| a == flag)?;
        self.args.get(pos + 1).map(OsString::as_os_str)
    }

    /// Last argument (typically the output path).
    pub fn last_arg(&self) -> Option<&OsStr> {
        self.args.last().map(OsString::as_os_str)
    }
}

impl std::fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for a in &self.args {
            write!(f, " {}", a.to_string_lossy())?;
        }
        Ok(())
    }
}
