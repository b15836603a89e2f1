//! 提交策略引擎
//!
//! 纯函数，无 I/O。作业能否接收提交一律以 [`can_submit`] 为准；
//! 倒计时、门户状态只服务于展示，不参与判定。

use chrono::{DateTime, Duration, Utc};

use crate::models::assignments::entities::{Assignment, PortalStatus, Submission};
use crate::models::assignments::responses::PortalInfo;

/// 能否提交
///
/// 门户开启且未过截止时间；恰好落在截止时间点上的提交接受。
pub fn can_submit(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    assignment.is_portal_open && now <= assignment.deadline
}

/// 派生门户状态
///
/// 手动关闭与过期同时成立时按手动关闭展示，
/// 教师重新打开后状态自然落到 closed_expired。
pub fn portal_status(assignment: &Assignment, now: DateTime<Utc>) -> PortalStatus {
    if !assignment.is_portal_open {
        PortalStatus::ClosedManual
    } else if now > assignment.deadline {
        PortalStatus::ClosedExpired
    } else {
        PortalStatus::Open
    }
}

/// 剩余时间（仅用于展示）
#[derive(Debug, Clone, PartialEq)]
pub enum TimeRemaining {
    Remaining(Duration),
    Expired,
}

pub fn time_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    if now > deadline {
        TimeRemaining::Expired
    } else {
        TimeRemaining::Remaining(deadline - now)
    }
}

/// 提交归属的规范学生 ID
///
/// 提交记录可能只带原始 student_id，也可能带已填充的学生对象；
/// 所有归属比较都必须经过这一个入口，两种形态取同一个 ID。
pub fn submission_student_id(submission: &Submission) -> i64 {
    submission
        .student
        .as_ref()
        .map_or(submission.student_id, |s| s.id)
}

/// 该提交是否属于指定学生
pub fn is_own_submission(submission: &Submission, student_id: i64) -> bool {
    submission_student_id(submission) == student_id
}

/// 组装门户视图信息
pub fn portal_info(assignment: &Assignment, now: DateTime<Utc>) -> PortalInfo {
    PortalInfo {
        status: portal_status(assignment, now),
        can_submit: can_submit(assignment, now),
        seconds_remaining: match time_remaining(assignment.deadline, now) {
            TimeRemaining::Remaining(d) => Some(d.num_seconds()),
            TimeRemaining::Expired => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::SubmissionStudent;
    use chrono::TimeZone;

    fn sample_assignment(deadline: DateTime<Utc>, is_portal_open: bool) -> Assignment {
        Assignment {
            id: 1,
            class_id: 10,
            teacher_id: 100,
            title: "Essay".to_string(),
            description: None,
            subject: "English".to_string(),
            file_url: None,
            deadline,
            is_portal_open,
            created_at: Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sample_submission(student_id: i64, student: Option<SubmissionStudent>) -> Submission {
        Submission {
            id: 1,
            assignment_id: 1,
            student_id,
            student,
            file_url: "https://cdn.example.com/a.pdf".to_string(),
            remarks: None,
            submitted_at: Utc.with_ymd_and_hms(2023, 12, 15, 0, 0, 0).unwrap(),
        }
    }

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_submit_before_deadline_accepted() {
        let a = sample_assignment(deadline(), true);
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert!(can_submit(&a, now));
    }

    #[test]
    fn test_submit_at_exact_deadline_accepted() {
        // 截止时间点本身仍可提交（<=，不是 <）
        let a = sample_assignment(deadline(), true);
        assert!(can_submit(&a, deadline()));
    }

    #[test]
    fn test_submit_after_deadline_rejected() {
        let a = sample_assignment(deadline(), true);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
        assert!(!can_submit(&a, now));
    }

    #[test]
    fn test_expired_rejected_even_if_portal_open() {
        let a = sample_assignment(deadline(), true);
        for secs in [1, 60, 86400] {
            let now = deadline() + Duration::seconds(secs);
            assert!(!can_submit(&a, now));
        }
    }

    #[test]
    fn test_manually_closed_rejected_regardless_of_time() {
        let a = sample_assignment(deadline(), false);
        let before = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert!(!can_submit(&a, before));
        assert!(!can_submit(&a, deadline()));
        assert!(!can_submit(&a, after));
    }

    #[test]
    fn test_portal_status_open() {
        let a = sample_assignment(deadline(), true);
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(portal_status(&a, now), PortalStatus::Open);
    }

    #[test]
    fn test_portal_status_closed_manual() {
        let a = sample_assignment(deadline(), false);
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(portal_status(&a, now), PortalStatus::ClosedManual);
    }

    #[test]
    fn test_portal_status_closed_expired() {
        let a = sample_assignment(deadline(), true);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(portal_status(&a, now), PortalStatus::ClosedExpired);
    }

    #[test]
    fn test_portal_status_manual_wins_over_expired() {
        // 手动关闭且已过期：按手动关闭展示
        let a = sample_assignment(deadline(), false);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(portal_status(&a, now), PortalStatus::ClosedManual);
    }

    #[test]
    fn test_time_remaining() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(
            time_remaining(deadline(), now),
            TimeRemaining::Remaining(Duration::hours(1))
        );
        // 截止时间点剩余为零但尚未过期
        assert_eq!(
            time_remaining(deadline(), deadline()),
            TimeRemaining::Remaining(Duration::zero())
        );
        assert_eq!(
            time_remaining(deadline(), deadline() + Duration::seconds(1)),
            TimeRemaining::Expired
        );
    }

    #[test]
    fn test_own_submission_with_raw_id() {
        let sub = sample_submission(42, None);
        assert!(is_own_submission(&sub, 42));
        assert!(!is_own_submission(&sub, 43));
    }

    #[test]
    fn test_own_submission_with_populated_student() {
        let sub = sample_submission(
            42,
            Some(SubmissionStudent {
                id: 42,
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }),
        );
        assert!(is_own_submission(&sub, 42));
        assert!(!is_own_submission(&sub, 7));
    }

    #[test]
    fn test_canonical_id_prefers_populated_student() {
        // 两种形态不一致时以填充对象为准，比较结果与取 ID 一致
        let sub = sample_submission(
            0,
            Some(SubmissionStudent {
                id: 42,
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }),
        );
        assert_eq!(submission_student_id(&sub), 42);
        assert!(is_own_submission(&sub, 42));
        assert!(!is_own_submission(&sub, 0));
    }

    #[test]
    fn test_portal_info_open() {
        let a = sample_assignment(deadline(), true);
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        let info = portal_info(&a, now);
        assert_eq!(info.status, PortalStatus::Open);
        assert!(info.can_submit);
        assert_eq!(info.seconds_remaining, Some(3600));
    }

    #[test]
    fn test_portal_info_expired() {
        let a = sample_assignment(deadline(), true);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let info = portal_info(&a, now);
        assert_eq!(info.status, PortalStatus::ClosedExpired);
        assert!(!info.can_submit);
        assert_eq!(info.seconds_remaining, None);
    }

    #[test]
    fn test_portal_info_closed_manual_still_counts_down() {
        // 手动关闭不等于过期，倒计时仍可展示，但不可提交
        let a = sample_assignment(deadline(), false);
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        let info = portal_info(&a, now);
        assert_eq!(info.status, PortalStatus::ClosedManual);
        assert!(!info.can_submit);
        assert_eq!(info.seconds_remaining, Some(3600));
    }
}
