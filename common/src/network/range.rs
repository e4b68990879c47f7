use std::net::Ipv4Addr;

/// Inclusive run of host addresses handed out to a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignableRange {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl AssignableRange {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> usize {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        end.checked_sub(start).map_or(0, |span| span as usize + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.start_addr <= addr && addr <= self.end_addr
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_iter_and_len() {
        let range = AssignableRange::new(Ipv4Addr::new(10, 0, 5, 20), Ipv4Addr::new(10, 0, 5, 199));
        assert_eq!(range.len(), 180);
        assert_eq!(range.iter().count(), 180);
        assert_eq!(range.iter().next(), Some(Ipv4Addr::new(10, 0, 5, 20)));
        assert_eq!(range.iter().next_back(), Some(Ipv4Addr::new(10, 0, 5, 199)));
    }

    #[test]
    fn test_range_contains() {
        let range = AssignableRange::new(Ipv4Addr::new(10, 0, 5, 20), Ipv4Addr::new(10, 0, 5, 199));
        assert!(range.contains(Ipv4Addr::new(10, 0, 5, 20)));
        assert!(range.contains(Ipv4Addr::new(10, 0, 5, 100)));
        assert!(!range.contains(Ipv4Addr::new(10, 0, 5, 19)));
        assert!(!range.contains(Ipv4Addr::new(10, 0, 5, 200)));
        assert!(!range.contains(Ipv4Addr::new(10, 0, 6, 100)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = AssignableRange::new(Ipv4Addr::new(10, 0, 0, 9), Ipv4Addr::new(10, 0, 0, 1));
        assert!(range.is_empty());
    }
}
