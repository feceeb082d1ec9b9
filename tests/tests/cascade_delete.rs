//! Cascade deletes over the demo data.

use scribe_tests::prelude::*;

mod delete_user_with_posts {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("delete_user_with_posts")
            .seeded()
            // Posts 0 and 1 are Rocky's; comments 0 and 2 sit on post 0,
            // comment 3 on post 1, and comment 1 is Rocky's own.
            .step("delete_rocky", op::delete_user("1"), |a| {
                a.ids(&["1"])
                    .cascaded_posts(&["0", "1"])
                    .cascaded_comments(&["0", "2", "3", "1"])
            })
            .step("users_left", op::users(None), |a| a.ids(&["0", "2"]))
            .step("posts_left", op::posts(None), |a| a.ids(&["2"]))
            .step("comments_left", op::comments(), |a| a.empty())
            .final_counts(2, 1, 0)
    }

    #[test]
    fn test_delete_user_removes_posts_and_all_related_comments() {
        scenario().run().unwrap();
    }
}

mod delete_user_without_posts {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("delete_user_without_posts")
            .seeded()
            .step("delete_tootsie", op::delete_user("2"), |a| {
                a.cascaded_posts(&[]).cascaded_comments(&["3"])
            })
            .step("posts_untouched", op::posts(None), |a| a.ids(&["0", "1", "2"]))
            .step("comments_left", op::comments(), |a| a.ids(&["0", "1", "2"]))
            .final_counts(2, 3, 3)
    }

    #[test]
    fn test_delete_user_removes_only_own_comments() {
        scenario().run().unwrap();
    }
}

mod delete_post {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("delete_post")
            .seeded()
            .step("delete_hello_world", op::delete_post("0"), |a| {
                a.ids(&["0"]).cascaded_comments(&["0", "2"])
            })
            .step("comments_left", op::comments(), |a| a.ids(&["1", "3"]))
            .step("authors_kept", op::users(None), |a| a.returned(3))
            .final_counts(3, 2, 2)
    }

    #[test]
    fn test_delete_post_removes_its_comments() {
        scenario().run().unwrap();
    }
}

mod delete_missing {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("delete_missing")
            .seeded()
            .step("delete_unknown_user", op::delete_user("9"), |a| {
                a.error_kind("NOT_FOUND").error("User not found: 9")
            })
            .step("delete_unknown_post", op::delete_post("9"), |a| {
                a.error_kind("NOT_FOUND")
            })
            .step("delete_twice_first", op::delete_post("2"), |a| a.returned(1))
            .step("delete_twice_second", op::delete_post("2"), |a| {
                a.error_kind("NOT_FOUND")
            })
            .final_counts(3, 2, 3)
    }

    #[test]
    fn test_missing_targets_leave_store_unchanged() {
        scenario().run().unwrap();
    }
}
