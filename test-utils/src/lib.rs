//! Result-returning assertions for tests, so fallible setup can use `?`
//! and mismatches are reported through the same error path.

#[macro_export]
macro_rules! expect {
    ($is_true:expr $(,)?) => {
        if !($is_true) {
            return Err(anyhow::anyhow!("expected true: {}", stringify!($is_true)).into());
        }
    };
}
#[macro_export]
macro_rules! expect_eq {
    ($left:expr, $right:expr $(, $msg:expr)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    #[allow(unused_mut)]
                    let mut err_str = format!(
                        "not equal:\n\tleft: {} = {:?}\n\tright: {} = {:?}",
                        stringify!($left), left_val,
                        stringify!($right), right_val
                    );
                    $(
                        err_str.push_str(&format!("\n\t{}", $msg));
                    )?
                    return Err(anyhow::Error::msg(err_str).into());
                }
            }
        }
    };
}

pub type TestResult = Result<(), TestError>;
pub struct TestError(pub anyhow::Error);
impl<E: Into<anyhow::Error>> From<E> for TestError {
    fn from(e: E) -> Self {
        TestError(e.into())
    }
}
impl std::fmt::Debug for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\x1b[0;91m{}\x1b[0m", self.0)?;
        for cause in self.0.chain().skip(1) {
            writeln!(f, "  caused by: {cause}")?;
        }
        Ok(())
    }
}
