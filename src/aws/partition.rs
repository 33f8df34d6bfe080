/// AWS partition a region belongs to.
///
/// Decides both the ARN prefix and the domain of the sign-in and console
/// endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Partition {
    #[default]
    Aws,
    AwsUsGov,
    AwsCn,
}

impl Partition {
    pub fn from_region(region: &str) -> Self {
        match region {
            r if r.starts_with("us-gov-") => Self::AwsUsGov,
            r if r.starts_with("cn-") => Self::AwsCn,
            _ => Self::Aws,
        }
    }

    /// Partition identifier used in ARNs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::AwsUsGov => "aws-us-gov",
            Self::AwsCn => "aws-cn",
        }
    }

    /// Domain hosting the sign-in and console endpoints
    pub fn console_domain(self) -> &'static str {
        match self {
            Self::Aws => "aws.amazon.com",
            Self::AwsUsGov => "amazonaws-us-gov.com",
            Self::AwsCn => "amazonaws.cn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_region() {
        assert_eq!(Partition::from_region("us-east-1"), Partition::Aws);
        assert_eq!(Partition::from_region("eu-west-1"), Partition::Aws);
        assert_eq!(Partition::from_region("us-gov-west-1"), Partition::AwsUsGov);
        assert_eq!(Partition::from_region("cn-north-1"), Partition::AwsCn);
        assert_eq!(Partition::from_region(""), Partition::Aws);
    }

    #[test]
    fn test_console_domain() {
        assert_eq!(Partition::Aws.console_domain(), "aws.amazon.com");
        assert_eq!(Partition::AwsUsGov.console_domain(), "amazonaws-us-gov.com");
        assert_eq!(Partition::AwsCn.console_domain(), "amazonaws.cn");
    }

    #[test]
    fn test_default_is_commercial() {
        assert_eq!(Partition::default().as_str(), "aws");
    }
}
