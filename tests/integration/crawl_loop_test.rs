// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Crawl loop behavior against a scripted fake browser session.

use std::sync::Arc;

use sosanhgia::crawler::page_crawler::PageCrawler;
use sosanhgia::crawler::session::{CrawlError, SessionConfig};

use crate::helpers::{listing_html, product_html, test_options, FakeSession, FakeWorld, Next};

const SEARCH_URL: &str = "https://tiki.vn/search?q=iphone&page=1";

fn crawler_over(world: Arc<FakeWorld>, max_pages: u32) -> PageCrawler {
    PageCrawler::with_session(
        Box::new(FakeSession { world }),
        test_options(max_pages),
    )
}

#[tokio::test]
async fn empty_listing_yields_empty_result() {
    let world = Arc::new(FakeWorld::new(
        SEARCH_URL,
        vec![listing_html(&[], Next::None)],
    ));
    let crawler = crawler_over(world, 2);

    let records = crawler.scrape_search_results(SEARCH_URL).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn failing_product_is_skipped_not_fatal() {
    let world = Arc::new(
        FakeWorld::new(
            SEARCH_URL,
            vec![listing_html(
                &["/iphone-13/p/1", "/iphone-14/p/2", "/iphone-15/p/3"],
                Next::None,
            )],
        )
        .with_product(
            "https://tiki.vn/iphone-13/p/1",
            &product_html("iPhone 13 128GB", "15.000.000đ", "CellphoneS"),
        )
        .with_failing_product("https://tiki.vn/iphone-14/p/2")
        .with_product(
            "https://tiki.vn/iphone-15/p/3",
            &product_html("iPhone 15 256GB", "25.000.000đ", "Tiki Trading"),
        ),
    );
    let crawler = crawler_over(world, 1);

    let records = crawler.scrape_search_results(SEARCH_URL).await.unwrap();

    // Exactly M-1 records, in surviving discovery order.
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "iPhone 13 128GB");
    assert_eq!(records[0].price, 15_000_000);
    assert_eq!(records[0].seller_name, "CellphoneS");
    assert_eq!(records[1].title, "iPhone 15 256GB");
}

#[tokio::test]
async fn max_pages_one_never_clicks_next() {
    let world = Arc::new(
        FakeWorld::new(
            SEARCH_URL,
            vec![
                listing_html(&["/iphone-13/p/1"], Next::Enabled),
                listing_html(&["/iphone-14/p/2"], Next::None),
            ],
        )
        .with_product(
            "https://tiki.vn/iphone-13/p/1",
            &product_html("iPhone 13", "15.000.000đ", "Tiki Trading"),
        ),
    );
    let world_ref = world.clone();
    let crawler = crawler_over(world, 1);

    let records = crawler.scrape_search_results(SEARCH_URL).await.unwrap();

    assert_eq!(records.len(), 1);
    assert!(world_ref.clicks().is_empty());
}

#[tokio::test]
async fn pagination_follows_next_until_exhausted() {
    let world = Arc::new(
        FakeWorld::new(
            SEARCH_URL,
            vec![
                listing_html(&["/iphone-13/p/1", "/iphone-14/p/2"], Next::Enabled),
                listing_html(&["/iphone-15/p/3"], Next::None),
            ],
        )
        .with_product(
            "https://tiki.vn/iphone-13/p/1",
            &product_html("iPhone 13", "15.000.000đ", "A"),
        )
        .with_product(
            "https://tiki.vn/iphone-14/p/2",
            &product_html("iPhone 14", "20.000.000đ", "B"),
        )
        .with_product(
            "https://tiki.vn/iphone-15/p/3",
            &product_html("iPhone 15", "25.000.000đ", "C"),
        ),
    );
    let world_ref = world.clone();
    let crawler = crawler_over(world, 5);

    let records = crawler.scrape_search_results(SEARCH_URL).await.unwrap();

    // Listing order first, then pagination order.
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["iPhone 13", "iPhone 14", "iPhone 15"]);
    assert_eq!(world_ref.clicks().len(), 1);
}

#[tokio::test]
async fn disabled_next_terminates_pagination() {
    let world = Arc::new(
        FakeWorld::new(
            SEARCH_URL,
            vec![
                listing_html(&["/iphone-13/p/1"], Next::Disabled),
                listing_html(&["/iphone-14/p/2"], Next::None),
            ],
        )
        .with_product(
            "https://tiki.vn/iphone-13/p/1",
            &product_html("iPhone 13", "15.000.000đ", "A"),
        ),
    );
    let world_ref = world.clone();
    let crawler = crawler_over(world, 5);

    let records = crawler.scrape_search_results(SEARCH_URL).await.unwrap();

    assert_eq!(records.len(), 1);
    assert!(world_ref.clicks().is_empty());
}

#[tokio::test]
async fn duplicate_links_across_pages_are_scraped_once() {
    let world = Arc::new(
        FakeWorld::new(
            SEARCH_URL,
            vec![
                listing_html(&["/iphone-13/p/1"], Next::Enabled),
                listing_html(&["/iphone-13/p/1", "/iphone-14/p/2"], Next::None),
            ],
        )
        .with_product(
            "https://tiki.vn/iphone-13/p/1",
            &product_html("iPhone 13", "15.000.000đ", "A"),
        )
        .with_product(
            "https://tiki.vn/iphone-14/p/2",
            &product_html("iPhone 14", "20.000.000đ", "B"),
        ),
    );
    let crawler = crawler_over(world, 5);

    let records = crawler.scrape_search_results(SEARCH_URL).await.unwrap();

    let urls: Vec<&str> = records.iter().map(|r| r.product_url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://tiki.vn/iphone-13/p/1",
            "https://tiki.vn/iphone-14/p/2",
        ]
    );
}

#[tokio::test]
async fn scrape_before_init_fails_fast() {
    let crawler = PageCrawler::new(SessionConfig::default(), test_options(1));
    let result = crawler.scrape_search_results(SEARCH_URL).await;
    assert!(matches!(result, Err(CrawlError::NotInitialized)));
}

#[tokio::test]
async fn close_is_idempotent() {
    let world = Arc::new(FakeWorld::new(
        SEARCH_URL,
        vec![listing_html(&[], Next::None)],
    ));
    let world_ref = world.clone();
    let mut crawler = crawler_over(world, 1);

    crawler.close().await;
    crawler.close().await;

    assert_eq!(world_ref.closes(), 1);

    // A closed crawler behaves like an uninitialized one.
    let result = crawler.scrape_search_results(SEARCH_URL).await;
    assert!(matches!(result, Err(CrawlError::NotInitialized)));
}
