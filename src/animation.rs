use std::{rc::Rc, time::Duration};

/// Clock that runs a step once after a delay.
pub trait Ticker {
    fn schedule(&self, delay: Duration, step: Box<dyn FnOnce()>);
}

/// Renders one frame per tick, starting after `delay`, until `frames` is exhausted.
pub fn play<T, A, R>(ticker: Rc<T>, delay: Duration, period: Duration, frames: A, render: R)
where
    T: Ticker + 'static,
    A: Iterator + 'static,
    R: FnMut(A::Item) + 'static,
{
    let next_ticker = Rc::clone(&ticker);
    ticker.schedule(
        delay,
        Box::new(move || advance(next_ticker, period, frames.peekable(), render)),
    );
}

fn advance<T, A, R>(
    ticker: Rc<T>,
    period: Duration,
    mut frames: std::iter::Peekable<A>,
    mut render: R,
) where
    T: Ticker + 'static,
    A: Iterator + 'static,
    R: FnMut(A::Item) + 'static,
{
    let Some(frame) = frames.next() else {
        return;
    };
    render(frame);

    if frames.peek().is_none() {
        return;
    }

    let next_ticker = Rc::clone(&ticker);
    ticker.schedule(
        period,
        Box::new(move || advance(next_ticker, period, frames, render)),
    );
}


#[cfg(test)]
mod tests {
    use super::{testing::ManualTicker, *};
    use std::cell::RefCell;

    #[test]
    fn play_renders_every_frame_then_stops() {
        let ticker = Rc::new(ManualTicker::default());
        let rendered = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&rendered);
        play(
            Rc::clone(&ticker),
            Duration::from_millis(300),
            Duration::from_millis(100),
            1..=4,
            move |frame| sink.borrow_mut().push(frame),
        );

        assert_eq!(ticker.run_to_completion(), 4);
        assert_eq!(*rendered.borrow(), vec![1, 2, 3, 4]);
        assert_eq!(ticker.elapsed(), Duration::from_millis(600));
    }

    #[test]
    fn empty_animation_renders_nothing() {
        let ticker = Rc::new(ManualTicker::default());
        let rendered = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&rendered);
        play(
            Rc::clone(&ticker),
            Duration::ZERO,
            Duration::from_millis(16),
            std::iter::empty::<u8>(),
            move |_| *sink.borrow_mut() += 1,
        );

        assert_eq!(ticker.run_to_completion(), 1);
        assert_eq!(*rendered.borrow(), 0);
    }
}
