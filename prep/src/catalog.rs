//! Built-in content and client-side generators.
//!
//! Everything here stands in for a backend that does not exist yet: the
//! starter problem list, home-page testimonials, the interview question bank,
//! generated solver problems, a simulated test run, and canned interviewer
//! replies. Generators that need variety take an injected [`Rng`].

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use rand::Rng;
use time::OffsetDateTime;

use crate::model::{
    CodingProblem, Difficulty, ExperienceLevel, Feedback, InterviewType, ProblemDetail, ProblemExample, SessionQuestion,
    TestCase, TestResult, Testimonial,
};

pub const CATEGORIES: [&str; 6] = ["Array", "String", "Binary Search", "Stack", "Tree", "Dynamic Programming"];

pub const COMPANIES: [&str; 6] = ["Google", "Meta", "Amazon", "Apple", "Netflix", "Microsoft"];

// =============================================================================
// PROBLEMS
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn problem(
    id: u32,
    title: &str,
    difficulty: Difficulty,
    category: &str,
    description: &str,
    solved: bool,
    attempts: u32,
    success_rate: u32,
    complexity: (&str, &str),
) -> CodingProblem {
    CodingProblem {
        id,
        title: title.to_owned(),
        difficulty,
        category: category.to_owned(),
        description: description.to_owned(),
        solved,
        attempts,
        last_solved: None,
        time_spent_minutes: None,
        success_rate,
        time_complexity: complexity.0.to_owned(),
        space_complexity: complexity.1.to_owned(),
    }
}

/// Starter problem list used until the user has saved progress.
#[must_use]
pub fn default_problems() -> Vec<CodingProblem> {
    vec![
        problem(
            1,
            "Two Sum",
            Difficulty::Easy,
            "Array",
            "Given an array of integers, return indices of the two numbers such that they add up to a specific target.",
            true,
            3,
            85,
            ("O(n)", "O(n)"),
        ),
        problem(
            2,
            "Longest Substring Without Repeating Characters",
            Difficulty::Medium,
            "String",
            "Given a string, find the length of the longest substring without repeating characters.",
            false,
            1,
            65,
            ("O(n)", "O(min(m,n))"),
        ),
        problem(
            3,
            "Median of Two Sorted Arrays",
            Difficulty::Hard,
            "Binary Search",
            "Given two sorted arrays nums1 and nums2, return the median of the two sorted arrays.",
            false,
            0,
            35,
            ("O(log(m+n))", "O(1)"),
        ),
        problem(
            4,
            "Valid Parentheses",
            Difficulty::Easy,
            "Stack",
            "Given a string containing just the characters '(', ')', '{', '}', '[' and ']', determine if the input string is valid.",
            true,
            2,
            78,
            ("O(n)", "O(n)"),
        ),
        problem(
            5,
            "Binary Tree Inorder Traversal",
            Difficulty::Medium,
            "Tree",
            "Given the root of a binary tree, return the inorder traversal of its nodes' values.",
            false,
            2,
            72,
            ("O(n)", "O(n)"),
        ),
    ]
}

/// Browser filter for the coding-practice list. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemFilter {
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub search: String,
}

impl ProblemFilter {
    #[must_use]
    pub fn matches(&self, problem: &CodingProblem) -> bool {
        if self.difficulty.is_some_and(|d| d != problem.difficulty) {
            return false;
        }
        if self.category.as_deref().is_some_and(|c| c != problem.category) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || problem.title.to_lowercase().contains(&needle)
            || problem.description.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn apply<'a>(&self, problems: &'a [CodingProblem]) -> Vec<&'a CodingProblem> {
        problems.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Count an unsuccessful run.
pub fn record_attempt(problem: &mut CodingProblem) {
    problem.attempts = problem.attempts.saturating_add(1);
}

/// Count a successful run: marks the problem solved and recomputes the
/// success rate as `round(100 / attempts)`.
pub fn record_solve(problem: &mut CodingProblem, now: OffsetDateTime) {
    record_attempt(problem);
    problem.solved = true;
    problem.last_solved = Some(now);
    problem.success_rate = crate::stats::percentage(1, problem.attempts);
}

// =============================================================================
// SOLVER
// =============================================================================

/// Problem statement for the solver page.
#[must_use]
pub fn generate_problem(difficulty: Difficulty, category: &str, company: Option<&str>) -> ProblemDetail {
    let topic = category.to_lowercase();
    let company = company.map(str::trim).filter(|c| !c.is_empty()).unwrap_or("tech");
    ProblemDetail {
        title: format!("{category} Challenge: {difficulty} Level"),
        difficulty,
        category: category.to_owned(),
        description: format!(
            "Given an array of integers, solve this {topic} problem optimized for {company} interviews. \
             This problem tests your understanding of {topic} concepts and algorithmic thinking."
        ),
        examples: vec![
            ProblemExample {
                input: "nums = [2,7,11,15], target = 9".to_owned(),
                output: "[0,1]".to_owned(),
                explanation: Some("Because nums[0] + nums[1] == 9, we return [0, 1].".to_owned()),
            },
            ProblemExample { input: "nums = [3,2,4], target = 6".to_owned(), output: "[1,2]".to_owned(), explanation: None },
        ],
        constraints: strings(&[
            "2 ≤ nums.length ≤ 10⁴",
            "-10⁹ ≤ nums[i] ≤ 10⁹",
            "-10⁹ ≤ target ≤ 10⁹",
            "Only one valid answer exists.",
        ]),
        hints: strings(&[
            "Think about using a hash map to store values and their indices.",
            "For each element, check if target - element exists in the hash map.",
            "The time complexity can be optimized to O(n).",
        ]),
        starter_code: STARTER_CODE.to_owned(),
        test_cases: vec![
            test_case("[2,7,11,15], 9", "[0,1]", false),
            test_case("[3,2,4], 6", "[1,2]", false),
            test_case("[3,3], 6", "[0,1]", true),
        ],
    }
}

const STARTER_CODE: &str = r#"def solution(nums, target):
    """
    :type nums: List[int]
    :type target: int
    :rtype: List[int]
    """
    # Your code here
    pass"#;

fn test_case(input: &str, expected: &str, hidden: bool) -> TestCase {
    TestCase { input: input.to_owned(), expected_output: expected.to_owned(), hidden }
}

/// Simulated execution: every case passes with its expected output.
#[must_use]
pub fn run_tests(problem: &ProblemDetail, _code: &str) -> Vec<TestResult> {
    problem
        .test_cases
        .iter()
        .enumerate()
        .map(|(i, case)| TestResult {
            case: i + 1,
            input: case.input.clone(),
            expected: case.expected_output.clone(),
            actual: case.expected_output.clone(),
            passed: true,
            hidden: case.hidden,
        })
        .collect()
}

// =============================================================================
// INTERVIEW QUESTIONS
// =============================================================================

/// Question list for a mock interview, with company and level folded into
/// the prompts.
#[must_use]
pub fn generate_questions(interview_type: InterviewType, company: &str, level: ExperienceLevel) -> Vec<SessionQuestion> {
    match interview_type {
        InterviewType::Technical => {
            let focus = match level {
                ExperienceLevel::Entry => "basic load balancing",
                ExperienceLevel::Mid => "high availability and caching",
                ExperienceLevel::Senior => "global distribution and consistency",
            };
            vec![
                question(
                    1,
                    interview_type,
                    format!("Design a scalable system for {company}'s core product. How would you handle {focus}?"),
                    &[
                        "How would you handle database scaling?",
                        "What caching strategies would you implement?",
                        "How would you ensure data consistency?",
                    ],
                    &["Load balancing strategies", "Database design considerations", "Caching mechanisms", "Scalability patterns"],
                    1200,
                ),
                question(
                    2,
                    interview_type,
                    "Implement a function to find the longest palindromic substring in a given string. \
                     Explain your approach and analyze the time complexity."
                        .to_owned(),
                    &[
                        "Can you optimize this further?",
                        "How would you handle edge cases?",
                        "What if the string is very large?",
                    ],
                    &["Algorithm explanation", "Time and space complexity", "Edge case handling", "Code implementation"],
                    900,
                ),
            ]
        }
        InterviewType::Behavioral => vec![
            question(
                1,
                interview_type,
                format!(
                    "Tell me about a time when you had to work with a difficult team member. How did you handle the \
                     situation, especially considering {company}'s collaborative culture?"
                ),
                &[
                    "What was the outcome?",
                    "What would you do differently?",
                    "How did this experience change your approach to teamwork?",
                ],
                &["Specific situation description", "Actions taken", "Results achieved", "Lessons learned"],
                600,
            ),
            question(
                2,
                interview_type,
                "Describe a project where you had to learn a new technology quickly. How did you approach the \
                 learning process?"
                    .to_owned(),
                &[
                    "What challenges did you face?",
                    "How did you ensure code quality while learning?",
                    "How do you stay updated with new technologies?",
                ],
                &["Learning methodology", "Time management", "Quality assurance", "Continuous learning approach"],
                600,
            ),
        ],
        InterviewType::SystemDesign => {
            let scale = if company.trim() == "Meta" { "billions of users" } else { "millions of users" };
            let focus = if level == ExperienceLevel::Senior {
                "global scale, consistency, and fault tolerance"
            } else {
                "basic messaging, delivery, and storage"
            };
            vec![question(
                1,
                interview_type,
                format!("Design a distributed messaging system like WhatsApp that can handle {scale}. Consider {focus}."),
                &[
                    "How would you handle message ordering?",
                    "What about offline message delivery?",
                    "How would you implement group chats?",
                    "What are your database choices and why?",
                ],
                &[
                    "High-level architecture",
                    "Database design",
                    "Message delivery guarantees",
                    "Scalability considerations",
                    "Security and privacy",
                ],
                2700,
            )]
        }
    }
}

fn question(
    id: u32,
    kind: InterviewType,
    prompt: String,
    follow_up: &[&str],
    expected_points: &[&str],
    time_limit_secs: u32,
) -> SessionQuestion {
    SessionQuestion {
        id,
        kind,
        prompt,
        follow_up: strings(follow_up),
        expected_points: strings(expected_points),
        time_limit_secs: Some(time_limit_secs),
    }
}

// =============================================================================
// INTERVIEW ROOM
// =============================================================================

pub const ROOM_OPENING_QUESTION: &str =
    "Let's start with a simple question: Can you tell me a bit about yourself and what interests you about this role?";

const INTERVIEWER_REPLIES: [&str; 7] = [
    "That's a great answer! Can you give me a specific example of a time when you had to overcome a significant challenge at work?",
    "Interesting perspective. How do you typically handle situations where you disagree with a team member or supervisor?",
    "I appreciate the detail in your response. Tell me about a project you're particularly proud of and what made it successful.",
    "Good insight. What would you say is your greatest strength, and how has it helped you in your career?",
    "Thank you for sharing that. Can you describe a time when you had to learn something completely new for a project?",
    "That's valuable experience. How do you prioritize your tasks when you have multiple deadlines approaching?",
    "Excellent example. What motivates you most in your work, and how do you stay engaged during challenging periods?",
];

/// System greeting posted when a room opens.
#[must_use]
pub fn room_intro(interview_type: &str) -> String {
    let kind = if interview_type.trim().is_empty() { "behavioral" } else { interview_type.trim() };
    format!(
        "Welcome to your {kind} interview practice session! I'm your AI interviewer, and I'll be asking you questions \
         based on the job description and your background. Please respond naturally and take your time to think \
         through your answers. Let's begin!"
    )
}

/// One canned follow-up, chosen uniformly.
pub fn interviewer_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    INTERVIEWER_REPLIES[rng.random_range(0..INTERVIEWER_REPLIES.len())]
}

// =============================================================================
// TESTIMONIALS
// =============================================================================

fn testimonial(name: &str, role: &str, content: &str, rating: u8) -> Testimonial {
    Testimonial { name: name.to_owned(), role: role.to_owned(), content: content.to_owned(), rating }
}

#[must_use]
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Sarah Chen",
            "Software Engineer at Google",
            "The mock interviews felt close to the real thing. I walked into my onsite knowing what to expect.",
            5,
        ),
        testimonial(
            "Marcus Johnson",
            "Product Manager at Meta",
            "Behavioral practice helped me structure my stories. The feedback on each answer was specific and useful.",
            5,
        ),
        testimonial(
            "Priya Patel",
            "Senior Developer at Amazon",
            "Coding practice by category made it easy to focus on my weak spots before the interview loop.",
            4,
        ),
    ]
}

/// Home-page cards: user feedback first (already newest first), then the
/// static testimonials.
#[must_use]
pub fn testimonials(feedback: &[Feedback]) -> Vec<Testimonial> {
    feedback.iter().map(Testimonial::from).chain(default_testimonials()).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
