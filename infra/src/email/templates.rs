//! Outbound email subjects and HTML bodies

/// Subject line for the signup verification email
pub const SUBJECT_VERIFY: &str = "Verify Your Account";
/// Subject line for the post-verification confirmation email
pub const SUBJECT_VERIFIED: &str = "Your Account is Verified";
/// Subject line for the regenerated-password email
pub const SUBJECT_NEW_PASSWORD: &str = "New Password of Your Account";

/// HTML body carrying the one-time verification code
pub fn otp_email(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <style>
    @media only screen and (max-width: 620px) {{
      h1 {{ font-size: 20px; padding: 5px; }}
    }}
  </style>
</head>
<body>
  <div style="max-width: 620px; margin: 0 auto; font-family: sans-serif; color: #272727;">
    <h1 style="background: #f6f6f6; padding: 10px; text-align: center; color: #272727;">We are delighted to welcome you to our team!</h1>
    <p>Please Verify Your Email To Continue. Your verification code is:</p>
    <p style="width: 80px; margin: 0 auto; font-weight: bold; text-align: center; background: #f6f6f6; border-radius: 5px; font-size: 25px;">{code}</p>
  </div>
</body>
</html>"#
    )
}

/// HTML body acknowledging a completed verification
pub fn verification_success_email() -> String {
    "<h1>Your Account is successfully verified</h1>".to_string()
}

/// HTML body carrying the regenerated password
pub fn new_password_email(password: &str) -> String {
    format!("<h1>Your New Password is {}</h1>", password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_email_embeds_code() {
        let body = otp_email("4821");
        assert!(body.contains("4821"));
        assert!(body.contains("verification code"));
    }

    #[test]
    fn test_new_password_email_embeds_password() {
        assert!(new_password_email("Ab3dEf9h").contains("Ab3dEf9h"));
    }
}
