use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::problem::Problem;

lazy_static! {
    /// Checked in order; the first match wins.
    static ref ONLINE_JUDGE_URLS: Vec<(&'static str, Regex)> = vec![
        ("cf", Regex::new(r"^https://codeforces\.com/contest/(\d+)/problem/(\S+)$").unwrap()),
        ("cf", Regex::new(r"^https://codeforces\.com/problemset/problem/(\d+)/(\S+)$").unwrap()),
        ("cf", Regex::new(r"^https://codeforces\.com/gym/(\d+)/problem/(\S+)$").unwrap()),
        ("atc", Regex::new(r"^https://atcoder\.jp/contests/(\S+)/tasks/\S+_(\S+)$").unwrap()),
        ("nc", Regex::new(r"^https://ac\.nowcoder\.com/acm/contest/(\S+)/(\S+)$").unwrap()),
        ("vjudge", Regex::new(r"^https://vjudge\.net/contest/(\S+)#problem/(\S+)$").unwrap()),
        ("vjudge", Regex::new(r"^https://vjudge\.net/problem/(\S+)/(\S+)$").unwrap()),
    ];

    // Luogu has no contest number.
    static ref LUOGU_URL: Regex = Regex::new(r"^https://www\.luogu\.com\.cn/problem/(\S+)").unwrap();
}

/// Derives the source file name for `problem`, e.g. `cf-1234-a.cpp`.
pub fn problem_file_name(problem: &Problem, ext: &str) -> String {
    let url = problem.url.as_str();

    for (judge, re) in ONLINE_JUDGE_URLS.iter() {
        if let Some(caps) = re.captures(url) {
            let name = format!("{}-{}-{}", judge, &caps[1], &caps[2]);
            return format!("{}.{}", name.to_lowercase(), ext);
        }
    }

    if let Some(caps) = LUOGU_URL.captures(url) {
        let id = caps[1].split('?').next().unwrap_or_default();
        return format!("lg-{}.{}", id.to_lowercase(), ext);
    }

    // Kattis and friends carry no contest or letter in the url.
    let name: String = problem
        .name
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("{}.{}", name, ext)
}

/// Contest id followed by problem index, as the Codeforces submit form expects.
pub fn codeforces_problem_name(url: &str) -> String {
    let parts: Vec<&str> = url.trim_end_matches('/').split('/').collect();
    let index = parts.last().copied().unwrap_or_default();
    let contest_back = if url.contains("problemset") { 2 } else { 3 };
    let contest = parts
        .len()
        .checked_sub(contest_back)
        .and_then(|i| parts.get(i))
        .copied()
        .unwrap_or_default();
    format!("{}{}", contest, index)
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
}

pub fn is_kattis(url: &str) -> bool {
    host_of(url).as_deref() == Some("open.kattis.com")
}

pub fn is_codeforces(url: &str) -> bool {
    matches!(
        host_of(url).as_deref(),
        Some("codeforces.com") | Some("www.codeforces.com")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(url: &str, name: &str) -> Problem {
        Problem {
            name: name.to_string(),
            group: String::new(),
            url: url.to_string(),
            interactive: false,
            memory_limit: 256,
            time_limit: 1000,
            tests: Vec::new(),
            src_path: Default::default(),
        }
    }

    fn file_name(url: &str) -> String {
        problem_file_name(&problem(url, "unused name"), "cpp")
    }

    #[test]
    fn codeforces_contest() {
        assert_eq!(
            problem_file_name(
                &problem("https://codeforces.com/contest/1234/problem/A", "A. Foo"),
                "cpp"
            ),
            "cf-1234-a.cpp"
        );
    }

    #[test]
    fn every_judge_pattern() {
        let cases = [
            ("https://codeforces.com/problemset/problem/1520/F2", "cf-1520-f2.cpp"),
            ("https://codeforces.com/gym/102001/problem/K", "cf-102001-k.cpp"),
            ("https://atcoder.jp/contests/abc123/tasks/abc123_a", "atc-abc123-a.cpp"),
            ("https://atcoder.jp/contests/ARC100/tasks/arc100_B", "atc-arc100-b.cpp"),
            ("https://ac.nowcoder.com/acm/contest/11166/A", "nc-11166-a.cpp"),
            ("https://vjudge.net/contest/445115#problem/B", "vjudge-445115-b.cpp"),
            ("https://vjudge.net/problem/UVA/100", "vjudge-uva-100.cpp"),
        ];
        for (url, expected) in cases {
            assert_eq!(file_name(url), expected, "{}", url);
        }
    }

    #[test]
    fn luogu_strips_query() {
        assert_eq!(
            problem_file_name(
                &problem("https://www.luogu.com.cn/problem/P1001?contestId=5", "A+B"),
                "py"
            ),
            "lg-p1001.py"
        );
        assert_eq!(file_name("https://www.luogu.com.cn/problem/CF1A"), "lg-cf1a.cpp");
    }

    #[test]
    fn falls_back_to_dashed_name() {
        assert_eq!(
            problem_file_name(
                &problem("https://open.kattis.com/problems/twosum", "Two Sum Easy"),
                "java"
            ),
            "Two-Sum-Easy.java"
        );
        assert_eq!(
            problem_file_name(&problem("not a url", "a\tb  c"), "rs"),
            "a-b--c.rs"
        );
    }

    #[test]
    fn non_matching_codeforces_path_falls_back() {
        assert_eq!(
            problem_file_name(
                &problem("https://codeforces.com/blog/entry/1", "Blog Post"),
                "c"
            ),
            "Blog-Post.c"
        );
    }

    #[test]
    fn codeforces_problem_names() {
        assert_eq!(
            codeforces_problem_name("https://codeforces.com/contest/1234/problem/A"),
            "1234A"
        );
        assert_eq!(
            codeforces_problem_name("https://codeforces.com/problemset/problem/4/A"),
            "4A"
        );
        assert_eq!(
            codeforces_problem_name("https://codeforces.com/gym/102001/problem/K"),
            "102001K"
        );
    }

    #[test]
    fn judge_hosts() {
        assert!(is_kattis("https://open.kattis.com/problems/hello"));
        assert!(!is_kattis("https://kattis.com/problems/hello"));
        assert!(is_codeforces("https://codeforces.com/contest/1/problem/A"));
        assert!(!is_codeforces("https://atcoder.jp/contests/abc123/tasks/abc123_a"));
        assert!(!is_codeforces("garbage"));
    }
}
