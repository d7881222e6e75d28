#![allow(dead_code)]

use commentdeck_shared::{Address, Comment, User};
use proptest::prelude::*;

/// 25 comments, five per post. Names are a permutation of `a`..`y` so a
/// name sort is fully determined; exactly ids 6 and 18 mention "test".
pub fn twenty_five_comments() -> Vec<Comment> {
    (0..25_i64)
        .map(|i| {
            let letter = char::from(b'a' + ((i * 7) % 25) as u8);
            let body = if i == 5 || i == 17 {
                format!("quia TEST et {i}")
            } else {
                format!("dolore magnam {i}")
            };
            Comment {
                post_id: i / 5 + 1,
                id: i + 1,
                name: format!("{letter} laudantium"),
                email: format!("user{}@example.com", (i * 3) % 25),
                body,
            }
        })
        .collect()
}

pub fn leanne() -> User {
    User {
        id: 1,
        name: "Leanne Graham".to_string(),
        username: "Bret".to_string(),
        email: "Sincere@april.biz".to_string(),
        phone: "1-770-736-8031 x56442".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        },
    }
}

pub fn ids(comments: &[Comment]) -> Vec<i64> {
    comments.iter().map(|c| c.id).collect()
}

/// Small alphabets keep collisions (ties, matches) frequent.
pub fn arb_comment() -> impl Strategy<Value = Comment> {
    (1..5_i64, "[a-cA-C ]{0,4}", "[a-c]{1,3}@x", "[a-dA-D ]{0,6}").prop_map(
        |(post_id, name, email, body)| Comment {
            post_id,
            id: 0,
            name,
            email,
            body,
        },
    )
}

/// Comments with unique, ordered ids.
pub fn arb_comments() -> impl Strategy<Value = Vec<Comment>> {
    prop::collection::vec(arb_comment(), 0..40).prop_map(|mut comments| {
        for (index, comment) in comments.iter_mut().enumerate() {
            comment.id = index as i64 + 1;
        }
        comments
    })
}
