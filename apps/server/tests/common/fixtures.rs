//! Fixture catalog used by the integration tests.
//!
//! Ten challenges (3 Beginner, 3 Intermediate, 2 Advanced, 2 Expert), two
//! flashcards and one practice exercise per solution check kind.

pub const CATALOG: &str = r#"{
    "challenges": [
        {
            "id": 1,
            "title": "Basic motions",
            "description": "Move around with h, j, k and l",
            "tags": ["motions"],
            "difficulty": "Beginner",
            "expected_time_min": 10,
            "acceptance_criteria": ["Navigate without arrow keys"]
        },
        {
            "id": 2,
            "title": "Word hops",
            "description": "Jump between words with w, b and e",
            "tags": ["motions", "words"],
            "difficulty": "Beginner",
            "expected_time_min": 10
        },
        {
            "id": 3,
            "title": "Registers",
            "description": "Yank into named registers",
            "tags": ["registers"],
            "difficulty": "Advanced",
            "expected_time_min": 20
        },
        {
            "id": 4,
            "title": "Macros",
            "description": "Record and replay with q",
            "tags": ["macros"],
            "difficulty": "Expert",
            "expected_time_min": 30
        },
        {
            "id": 5,
            "title": "Searching",
            "description": "Find text with / and ?",
            "tags": ["search"],
            "difficulty": "Intermediate",
            "expected_time_min": 15
        },
        {
            "id": 6,
            "title": "Substitution",
            "description": "Search and replace with :s",
            "tags": ["search", "replace"],
            "difficulty": "Intermediate",
            "expected_time_min": 15
        },
        {
            "id": 7,
            "title": "Buffers",
            "description": "Switch between open buffers",
            "tags": ["buffers"],
            "difficulty": "Intermediate",
            "expected_time_min": 15
        },
        {
            "id": 8,
            "title": "Marks",
            "description": "Set and jump to marks",
            "tags": ["marks"],
            "difficulty": "Advanced",
            "expected_time_min": 20
        },
        {
            "id": 9,
            "title": "Folding",
            "description": "Collapse sections with folds",
            "tags": ["folds"],
            "difficulty": "Expert",
            "expected_time_min": 25
        },
        {
            "id": 10,
            "title": "Saving and quitting",
            "description": "Write files and leave the editor",
            "tags": ["basics"],
            "difficulty": "Beginner",
            "expected_time_min": 5
        }
    ],
    "flashcards_sample": [
        {
            "question": "Which command deletes a whole line?",
            "choices": ["dd", "dw", "x", "D"],
            "correct_index": 0,
            "hint": "Double the delete operator."
        },
        {
            "question": "Which command undoes the last change?",
            "choices": ["u", "U", "Ctrl-r", ":undo!"],
            "correct_index": 0,
            "hint": "A single lowercase letter."
        }
    ],
    "practice_exercises": [
        {
            "id": 1,
            "title": "Jump to position",
            "description": "Place the cursor on line 6, column 10",
            "difficulty": "Beginner",
            "goals": ["Use a line jump, then move within the line"],
            "hint": "6G then 9l",
            "initial_text": "one\ntwo\nthree\nfour\nfive\nsix seven eight\n",
            "solution_check": "cursor_position",
            "target_line": 6,
            "target_column": 10
        },
        {
            "id": 2,
            "title": "Fix the greeting",
            "description": "Edit the buffer until it reads hello world",
            "difficulty": "Beginner",
            "goals": ["Change the text"],
            "hint": "ciw",
            "initial_text": "goodbye world",
            "solution_check": "text_content",
            "expected_result": "  hello world  "
        },
        {
            "id": 3,
            "title": "Word practice",
            "description": "Hop across the sentence word by word",
            "difficulty": "Intermediate",
            "goals": ["Use w, b and e"],
            "hint": "Count the hops",
            "initial_text": "the quick brown fox",
            "solution_check": "word_navigation"
        },
        {
            "id": 4,
            "title": "Select a paragraph",
            "description": "Use visual mode on the paragraph",
            "difficulty": "Intermediate",
            "goals": ["Use vip"],
            "hint": "v then ip",
            "initial_text": "first paragraph\n\nsecond paragraph",
            "solution_check": "visual_selection"
        },
        {
            "id": 5,
            "title": "Inside the quotes",
            "description": "Operate on the quoted string",
            "difficulty": "Advanced",
            "goals": ["Use i\" and a\""],
            "hint": "ci\"",
            "initial_text": "say \"hello\" to vim",
            "solution_check": "text_objects"
        }
    ]
}"#;

/// Number of challenges in [`CATALOG`].
pub const TOTAL_CHALLENGES: usize = 10;
