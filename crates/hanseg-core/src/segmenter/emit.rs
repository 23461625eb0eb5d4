use std::iter::FusedIterator;

use crate::unicode::is_mergeable_fragment;

use super::route::Route;
use super::sentence::Sentence;

/// Lazy token stream over one sentence's best route.
///
/// Runs of single ASCII letters or digits are fused into one token; every
/// other word on the route is yielded as-is. Tokens borrow from the input, and
/// their concatenation is always the input.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    sentence: Sentence<'a>,
    route: Route,
    pos: usize,
    /// Half-open char range of mergeable fragments not yet yielded.
    run: Option<(usize, usize)>,
    /// Word that ended a run, yielded right after the run itself.
    queued: Option<&'a str>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(sentence: Sentence<'a>, route: Route) -> Self {
        Self {
            sentence,
            route,
            pos: 0,
            run: None,
            queued: None,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if let Some(word) = self.queued.take() {
            return Some(word);
        }

        let char_count = self.sentence.char_count();
        while self.pos < char_count {
            let x = self.pos;
            let y = self.route.end(x) + 1;
            self.pos = y;

            let word = self.sentence.slice(x, y);
            if is_mergeable_fragment(word) {
                self.run = Some(match self.run {
                    Some((start, _)) => (start, y),
                    None => (x, y),
                });
                continue;
            }

            if let Some((start, end)) = self.run.take() {
                self.queued = Some(word);
                return Some(self.sentence.slice(start, end));
            }
            return Some(word);
        }

        self.run
            .take()
            .map(|(start, end)| self.sentence.slice(start, end))
    }
}

impl FusedIterator for Tokens<'_> {}
