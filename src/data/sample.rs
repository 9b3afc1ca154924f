//! The built-in mock content backing the dashboard. Nothing here is
//! fetched or persisted; this is the whole data universe of the app.

use crate::models::{
    ActivityItem, Course, DashboardData, Deadline, Lesson, Level, Question, Quiz, StatTile,
    Urgency,
};

pub fn sample_dashboard() -> DashboardData {
    DashboardData {
        learner: "John".to_string(),
        stats: sample_stats(),
        enrolled: sample_enrolled(),
        recommended: sample_recommended(),
        activity: sample_activity(),
        deadlines: sample_deadlines(),
        quiz: sample_quiz(),
        lesson: sample_lesson(),
    }
}

fn sample_stats() -> Vec<StatTile> {
    vec![
        StatTile {
            title: "Courses Enrolled".to_string(),
            value: "12".to_string(),
            change: Some("+2 this month".to_string()),
        },
        StatTile {
            title: "Hours Learned".to_string(),
            value: "156h".to_string(),
            change: Some("+12h this week".to_string()),
        },
        StatTile {
            title: "Certificates Earned".to_string(),
            value: "8".to_string(),
            change: Some("+1 this week".to_string()),
        },
        StatTile {
            title: "Quiz Average".to_string(),
            value: "87%".to_string(),
            change: Some("+5% improvement".to_string()),
        },
    ]
}

fn sample_enrolled() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            title: "Complete Web Development Bootcamp".to_string(),
            instructor: "Dr. Sarah Johnson".to_string(),
            description: "Master modern web development with React, Node.js, and MongoDB. \
                          Build real-world projects and deploy them to production."
                .to_string(),
            duration: "12 hours".to_string(),
            students: 15420,
            rating: 4.8,
            progress: Some(65),
            level: Level::Intermediate,
            category: "Web Development".to_string(),
        },
        Course {
            id: "2".to_string(),
            title: "Data Science with Python".to_string(),
            instructor: "Prof. Michael Chen".to_string(),
            description: "Learn data analysis, machine learning, and visualization using \
                          Python, pandas, and scikit-learn."
                .to_string(),
            duration: "18 hours".to_string(),
            students: 8230,
            rating: 4.9,
            progress: Some(23),
            level: Level::Advanced,
            category: "Data Science".to_string(),
        },
    ]
}

fn sample_recommended() -> Vec<Course> {
    vec![
        Course {
            id: "3".to_string(),
            title: "UI/UX Design Fundamentals".to_string(),
            instructor: "Jessica Williams".to_string(),
            description: "Master the principles of user interface and user experience design \
                          with hands-on projects."
                .to_string(),
            duration: "8 hours".to_string(),
            students: 12580,
            rating: 4.7,
            progress: None,
            level: Level::Beginner,
            category: "Design".to_string(),
        },
        Course {
            id: "4".to_string(),
            title: "Mobile App Development with React Native".to_string(),
            instructor: "David Rodriguez".to_string(),
            description: "Build cross-platform mobile applications using React Native and \
                          deploy to app stores."
                .to_string(),
            duration: "15 hours".to_string(),
            students: 9670,
            rating: 4.6,
            progress: None,
            level: Level::Intermediate,
            category: "Mobile Development".to_string(),
        },
    ]
}

fn sample_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            text: "Completed \"React Hooks\" lesson".to_string(),
            when: "2 hours ago".to_string(),
        },
        ActivityItem {
            text: "Scored 95% on JavaScript Quiz".to_string(),
            when: "1 day ago".to_string(),
        },
        ActivityItem {
            text: "Earned \"React Developer\" certificate".to_string(),
            when: "3 days ago".to_string(),
        },
        ActivityItem {
            text: "Started \"Data Science with Python\"".to_string(),
            when: "1 week ago".to_string(),
        },
    ]
}

fn sample_deadlines() -> Vec<Deadline> {
    vec![
        Deadline {
            title: "Final Project".to_string(),
            course: "Web Development Bootcamp".to_string(),
            due: "Due in 3 days".to_string(),
            urgency: Urgency::DueSoon,
        },
        Deadline {
            title: "Module 3 Quiz".to_string(),
            course: "Data Science with Python".to_string(),
            due: "Due in 5 days".to_string(),
            urgency: Urgency::ThisWeek,
        },
        Deadline {
            title: "Peer Review".to_string(),
            course: "UI/UX Design Fundamentals".to_string(),
            due: "Due in 1 week".to_string(),
            urgency: Urgency::Optional,
        },
    ]
}

fn sample_quiz() -> Quiz {
    Quiz {
        title: "JavaScript Fundamentals Quiz".to_string(),
        description: "Test your knowledge of JavaScript basics including variables, \
                      functions, and control structures."
            .to_string(),
        time_limit: 15,
        total_points: 100,
        questions: vec![
            Question {
                id: "1".to_string(),
                prompt: "What is the correct way to declare a variable in JavaScript?"
                    .to_string(),
                options: vec![
                    "var myVariable;".to_string(),
                    "variable myVariable;".to_string(),
                    "v myVariable;".to_string(),
                    "declare myVariable;".to_string(),
                ],
                correct_answer: 0,
                explanation: "The 'var' keyword is used to declare variables in JavaScript."
                    .to_string(),
            },
            Question {
                id: "2".to_string(),
                prompt: "Which method is used to add an element to the end of an array?"
                    .to_string(),
                options: vec![
                    "append()".to_string(),
                    "push()".to_string(),
                    "add()".to_string(),
                    "insert()".to_string(),
                ],
                correct_answer: 1,
                explanation: "The push() method adds one or more elements to the end of an \
                              array."
                    .to_string(),
            },
            Question {
                id: "3".to_string(),
                prompt: "Which operator compares both value and type?".to_string(),
                options: vec![
                    "==".to_string(),
                    "=".to_string(),
                    "===".to_string(),
                    "!=".to_string(),
                ],
                correct_answer: 2,
                explanation: "The strict equality operator '===' compares value and type \
                              without coercion."
                    .to_string(),
            },
            Question {
                id: "4".to_string(),
                prompt: "What does a function return when it has no return statement?"
                    .to_string(),
                options: vec![
                    "null".to_string(),
                    "undefined".to_string(),
                    "0".to_string(),
                    "an empty string".to_string(),
                ],
                correct_answer: 1,
                explanation: "A function without an explicit return yields undefined."
                    .to_string(),
            },
            Question {
                id: "5".to_string(),
                prompt: "Which loop always executes its body at least once?".to_string(),
                options: vec![
                    "for".to_string(),
                    "while".to_string(),
                    "do...while".to_string(),
                    "for...of".to_string(),
                ],
                correct_answer: 2,
                explanation: "A do...while loop checks its condition after the first \
                              iteration."
                    .to_string(),
            },
        ],
    }
}

fn sample_lesson() -> Lesson {
    Lesson {
        title: "React Hooks in Depth".to_string(),
        description: "useState, useEffect, and the rules that keep them predictable."
            .to_string(),
        duration_secs: 1800,
        number: 8,
        total: 12,
    }
}
